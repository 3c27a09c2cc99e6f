//! Shorthands for common HTML tags, built from the `TextTemplate`
//! primitives only. Other tag sets can be added the same way, from
//! outside this crate via an extension trait.

//! Attribute values are interpolated as is (single-quoted, not
//! escaped).

use std::fmt::Display;

use anyhow::Result;

use crate::{error::RenderError, template::TextTemplate};

/// Define `$name` (content block) and `$name_text` (text content)
/// for a tag with closing marker.
macro_rules! def_paired_tag {
    { $tagname:literal, $name:ident, $name_text:ident } => {
        #[doc = concat!("`<", $tagname, ">` around the output of `content`.")]
        pub fn $name(&mut self, content: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
            self.tag($tagname, content)
        }

        #[doc = concat!("`<", $tagname, ">` around one text line.")]
        pub fn $name_text(&mut self, content: impl Display) -> Result<()> {
            self.tag_text($tagname, content)
        }
    }
}

impl<'p> TextTemplate<'p> {
    def_paired_tag!{"H2", h2, h2_text}
    def_paired_tag!{"H3", h3, h3_text}
    def_paired_tag!{"UL", ul, ul_text}
    def_paired_tag!{"LI", li, li_text}
    def_paired_tag!{"B", b, b_text}
    def_paired_tag!{"CODE", code, code_text}

    pub fn noscript(&mut self, content: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        self.tag("NOSCRIPT", content)
    }

    pub fn hr(&mut self) -> Result<(), RenderError> {
        self.open_tag("HR")
    }

    pub fn p(&mut self) -> Result<(), RenderError> {
        self.open_tag("P")
    }

    pub fn br(&mut self) -> Result<(), RenderError> {
        self.open_tag("BR")
    }

    /// A link, all on one line: `<A HREF='href'title='title'>`,
    /// content, `</A>`, then a line separator. Note that there's no
    /// space in front of the title attribute.
    pub fn a(
        &mut self,
        href: &str,
        title: Option<&str>,
        content: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        self.print(format_args!("<A HREF='{href}'"))?;
        if let Some(title) = title {
            self.print(format_args!("title='{title}'"))?;
        }
        self.print(">")?;
        content(self)?;
        self.print("</A>")?;
        self.newline()?;
        Ok(())
    }

    /// `a` with `content` printed without line separator.
    pub fn a_text(&mut self, href: &str, title: Option<&str>, content: impl Display) -> Result<()> {
        self.a(href, title, |t| Ok(t.print(content)?))
    }

    pub fn font(&mut self, size: &str, content: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        self.print(format_args!("<FONT SIZE='{size}'>"))?;
        content(self)?;
        self.print("</FONT>")?;
        self.newline()?;
        Ok(())
    }

    pub fn font_text(&mut self, size: &str, content: impl Display) -> Result<()> {
        self.font(size, |t| Ok(t.print(content)?))
    }

    pub fn comment(&mut self, comment: impl Display) -> Result<(), RenderError> {
        self.println(format_args!("<!-- {comment} -->"))
    }

    /// Prints `&nbsp` (sic, no semicolon) `count + 1` times.
    pub fn nbsp(&mut self, count: usize) -> Result<(), RenderError> {
        for _ in 0..=count {
            self.print("&nbsp")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{options::RenderOptions, printer::WriterPrinter};

    use super::*;

    fn run(f: impl FnOnce(&mut TextTemplate) -> Result<()>) -> String {
        let mut s = String::new();
        {
            let mut t = TextTemplate::with_printer(&RenderOptions::with_newline("\n"),
                                                   WriterPrinter::new(&mut s));
            f(&mut t).unwrap();
        }
        s
    }

    #[test]
    fn t_paired() {
        assert_eq!(run(|t| t.h2_text("Title")), "<H2>\nTitle\n</H2>\n");
        assert_eq!(run(|t| t.code(|t| t.b_text("x"))),
                   "<CODE>\n<B>\nx\n</B>\n</CODE>\n");
        assert_eq!(run(|t| t.noscript(|t| Ok(t.text("js off")?))),
                   "<NOSCRIPT>\njs off\n</NOSCRIPT>\n");
    }

    #[test]
    fn t_unpaired() {
        assert_eq!(run(|t| { t.p()?; t.br()?; t.hr()?; Ok(()) }),
                   "<P>\n<BR>\n<HR>\n");
    }

    #[test]
    fn t_a() {
        assert_eq!(run(|t| t.a_text("http://x/", None, "x")),
                   "<A HREF='http://x/'>x</A>\n");
        assert_eq!(run(|t| t.a_text("/y", Some("Why"), "y")),
                   "<A HREF='/y'title='Why'>y</A>\n");
        assert_eq!(run(|t| t.a("/z", None, |t| t.b_text("z"))),
                   "<A HREF='/z'><B>\nz\n</B>\n</A>\n");
    }

    #[test]
    fn t_no_escaping() {
        assert_eq!(run(|t| t.a_text("a'b", None, "<&>")),
                   "<A HREF='a'b'><&></A>\n");
        assert_eq!(run(|t| t.li_text("1 < 2")), "<LI>\n1 < 2\n</LI>\n");
    }

    #[test]
    fn t_font_and_comment() {
        assert_eq!(run(|t| t.font_text("+1", "big")), "<FONT SIZE='+1'>big</FONT>\n");
        assert_eq!(run(|t| Ok(t.comment("generated")?)), "<!-- generated -->\n");
    }

    #[test]
    fn t_nbsp_off_by_one() {
        assert_eq!(run(|t| Ok(t.nbsp(2)?)), "&nbsp&nbsp&nbsp");
        assert_eq!(run(|t| Ok(t.nbsp(0)?)), "&nbsp");
    }
}
