use std::{fmt, io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// `print` was called on a template whose printer was never set.
    #[error("no printer attached to the template")]
    UnconfiguredSink,

    #[error("writing to destination: {0}")]
    Destination(#[from] io::Error),

    #[error("opening {path:?} for writing: {source}")]
    Open {
        path: PathBuf,
        source: io::Error,
    },

    /// Failure raised from within a template's `render` body.
    #[error("render failed: {0:#}")]
    Render(anyhow::Error),
}

impl RenderError {
    pub fn is_unconfigured_sink(&self) -> bool {
        matches!(self, RenderError::UnconfiguredSink)
    }
}

// `fmt::Write` sinks only report that they failed, not why.
impl From<fmt::Error> for RenderError {
    fn from(e: fmt::Error) -> Self {
        RenderError::Destination(io::Error::new(io::ErrorKind::Other, e))
    }
}

/// Template bodies return `anyhow::Result`; errors that started out
/// as a `RenderError` (e.g. from a `print` call) are given back
/// unchanged, anything else is a `Render` failure.
impl From<anyhow::Error> for RenderError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<RenderError>() {
            Ok(e) => e,
            Err(e) => RenderError::Render(e),
        }
    }
}
