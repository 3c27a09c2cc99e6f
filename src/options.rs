//! Render configuration.

//! The line separator used by `println` and friends is not looked up
//! globally, it travels with the options into every render pass.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use kstring::KString;
use strum_macros::{EnumString, IntoStaticStr};

/// Name of the env var read by `RenderOptions::from_env`.
pub const NEWLINE_ENV_VAR: &str = "TAGPRINT_NEWLINE";

#[cfg(windows)]
pub const PLATFORM_NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
pub const PLATFORM_NEWLINE: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum LineEnding {
    #[strum(serialize = "lf")]
    Lf,
    #[strum(serialize = "crlf")]
    CrLf,
    #[strum(serialize = "cr")]
    Cr,
    #[strum(serialize = "platform")]
    Platform,
}

impl LineEnding {
    pub fn separator(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
            LineEnding::Platform => PLATFORM_NEWLINE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emitted by every `newline`/`println` call.
    pub newline: KString,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_line_ending(LineEnding::Platform)
    }
}

impl RenderOptions {
    pub fn from_line_ending(ending: LineEnding) -> Self {
        RenderOptions {
            newline: KString::from_static(ending.separator()),
        }
    }

    /// Any string can serve as separator, no check is done.
    pub fn with_newline(newline: impl Into<KString>) -> Self {
        RenderOptions {
            newline: newline.into(),
        }
    }

    fn from_env_value(val: Option<&str>) -> Result<Self> {
        match val {
            None | Some("") => Ok(Self::default()),
            Some(s) => {
                let ending = LineEnding::from_str(s).map_err(
                    |_| anyhow!("invalid value in {NEWLINE_ENV_VAR} env var: {s:?}, \
                                 expecting one of lf, crlf, cr, platform"))?;
                Ok(Self::from_line_ending(ending))
            }
        }
    }

    /// Defaults, with the separator overridden from the
    /// `TAGPRINT_NEWLINE` env var if set.
    pub fn from_env() -> Result<Self> {
        match std::env::var(NEWLINE_ENV_VAR) {
            Ok(s) => Self::from_env_value(Some(&s)),
            Err(std::env::VarError::NotPresent) => Self::from_env_value(None),
            Err(e) => Err(anyhow!("reading {NEWLINE_ENV_VAR} env var: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_line_ending_names() {
        assert_eq!(LineEnding::from_str("crlf").unwrap(), LineEnding::CrLf);
        assert_eq!(LineEnding::from_str("lf").unwrap().separator(), "\n");
        assert!(LineEnding::from_str("CRLF").is_err());
        let name: &'static str = LineEnding::Platform.into();
        assert_eq!(name, "platform");
    }

    #[test]
    fn t_default_is_platform() {
        assert_eq!(RenderOptions::default().newline.as_str(), PLATFORM_NEWLINE);
    }

    #[test]
    fn t_from_env_value() {
        assert_eq!(RenderOptions::from_env_value(None).unwrap(),
                   RenderOptions::default());
        assert_eq!(RenderOptions::from_env_value(Some("")).unwrap(),
                   RenderOptions::default());
        assert_eq!(RenderOptions::from_env_value(Some("cr")).unwrap().newline.as_str(),
                   "\r");
        let e = RenderOptions::from_env_value(Some("unix")).unwrap_err();
        assert!(e.to_string().contains(NEWLINE_ENV_VAR));
    }

    #[test]
    fn t_from_env() {
        std::env::set_var(NEWLINE_ENV_VAR, "crlf");
        let opts = RenderOptions::from_env();
        std::env::remove_var(NEWLINE_ENV_VAR);
        assert_eq!(opts.unwrap().newline.as_str(), "\r\n");
    }

    #[test]
    fn t_with_newline() {
        assert_eq!(RenderOptions::with_newline("<NL>").newline.as_str(), "<NL>");
    }
}
