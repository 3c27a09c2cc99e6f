//! The composition core: a builder holding a printer, on which
//! templates emit text and nested tags.

//! Nothing is buffered, every call writes through to the printer
//! right away. Nesting of tags follows the nesting of content blocks:
//! a block receives the builder as its argument, and `tag` closes the
//! tag it opened before returning, so open tags always form a stack.

//! Nothing here escapes markup-sensitive characters, neither in text
//! nor in attribute values. Callers have to supply safe input.

use std::{fmt::{self, Display}, io, path::Path};

use anyhow::Result;
use kstring::KString;

use crate::{error::RenderError,
            options::RenderOptions,
            printer::{NullPrinter, Printer},
            render::Renderer};

pub struct TextTemplate<'p> {
    printer: Box<dyn Printer + 'p>,
    has_printer: bool,
    newline: KString,
}

impl<'p> TextTemplate<'p> {
    /// A builder without printer: printing fails until `set_printer`
    /// is called.
    pub fn new(options: &RenderOptions) -> Self {
        TextTemplate {
            printer: Box::new(NullPrinter),
            has_printer: false,
            newline: options.newline.clone(),
        }
    }

    pub fn with_printer(options: &RenderOptions, printer: impl Printer + 'p) -> Self {
        let mut t = Self::new(options);
        t.set_printer(printer);
        t
    }

    /// Attach `printer`, returning the previous one.
    pub fn set_printer(&mut self, printer: impl Printer + 'p) -> Box<dyn Printer + 'p> {
        self.has_printer = true;
        std::mem::replace(&mut self.printer, Box::new(printer))
    }

    /// Detach the current printer, leaving the template unconfigured.
    pub fn take_printer(&mut self) -> Box<dyn Printer + 'p> {
        self.has_printer = false;
        std::mem::replace(&mut self.printer, Box::new(NullPrinter))
    }

    pub fn has_printer(&self) -> bool {
        self.has_printer
    }

    pub fn newline_str(&self) -> &str {
        self.newline.as_str()
    }

    /// Write `value` as is, without separator.
    pub fn print(&mut self, value: impl Display) -> Result<(), RenderError> {
        self.printer.print(&value)
    }

    /// Write one line separator.
    pub fn newline(&mut self) -> Result<(), RenderError> {
        // (Can't borrow self.newline while printing through self.)
        let TextTemplate { printer, newline, .. } = self;
        printer.print(&newline.as_str())
    }

    pub fn println(&mut self, value: impl Display) -> Result<(), RenderError> {
        self.print(value)?;
        self.newline()
    }

    /// Currently the same as `println`; no escaping is done.
    pub fn text(&mut self, content: impl Display) -> Result<(), RenderError> {
        self.println(content)
    }

    /// Emit `<name>` on its own line, without closing tag.
    pub fn open_tag(&mut self, name: &str) -> Result<(), RenderError> {
        self.println(format_args!("<{name}>"))
    }

    pub fn close_tag(&mut self, name: &str) -> Result<(), RenderError> {
        self.println(format_args!("</{name}>"))
    }

    /// Emit `<name>`, run `content` on this builder, then emit
    /// `</name>`, each marker on its own line. If `content` fails,
    /// the error is returned and the closing tag is not written.
    pub fn tag(
        &mut self,
        name: &str,
        content: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        self.open_tag(name)?;
        content(self)?;
        self.close_tag(name)?;
        Ok(())
    }

    /// `tag` with a text line as content.
    pub fn tag_text(&mut self, name: &str, content: impl Display) -> Result<()> {
        self.tag(name, |t| Ok(t.text(content)?))
    }
}

/// A text template is a printer too, so that one template can print
/// into another one.
impl<'p> Printer for TextTemplate<'p> {
    fn print(&mut self, value: &dyn fmt::Display) -> Result<(), RenderError> {
        self.printer.print(value)
    }
}

/// A document: `render` is the sequence of composition calls making
/// it up.
pub trait Template {
    fn render(&self, t: &mut TextTemplate<'_>) -> Result<()>;

    /// Render with the default options, see `Renderer`.
    fn render_to_text(&self) -> Result<String, RenderError> {
        Renderer::default().render_to_text(self)
    }

    fn render_to_writer<W: fmt::Write>(&self, writer: W) -> Result<W, RenderError>
    where Self: Sized
    {
        Renderer::default().render_to_writer(self, writer)
    }

    fn render_to_stream<W: io::Write>(&self, out: W) -> Result<(), RenderError>
    where Self: Sized
    {
        Renderer::default().render_to_stream(self, out)
    }

    fn render_to_file(&self, path: impl AsRef<Path>) -> Result<(), RenderError>
    where Self: Sized
    {
        Renderer::default().render_to_file(self, path)
    }
}

impl<T: Template + ?Sized> Template for &T {
    fn render(&self, t: &mut TextTemplate<'_>) -> Result<()> {
        (**self).render(t)
    }
}

/// Template from a closure, see `from_fn`.
pub struct FnTemplate<F>(F);

impl<F> Template for FnTemplate<F>
where F: Fn(&mut TextTemplate<'_>) -> Result<()>
{
    fn render(&self, t: &mut TextTemplate<'_>) -> Result<()> {
        (self.0)(t)
    }
}

pub fn from_fn<F>(f: F) -> FnTemplate<F>
where F: Fn(&mut TextTemplate<'_>) -> Result<()>
{
    FnTemplate(f)
}
