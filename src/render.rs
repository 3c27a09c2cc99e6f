//! Running a template against a destination.

//! Every pass gets a fresh `TextTemplate` with a printer owning (or
//! exclusively borrowing) the destination, so nothing is shared
//! between passes. Stream and file destinations are flushed and
//! closed before returning, also when the pass failed; whatever was
//! written up to the failure stays written.

use std::{fmt, fs::File, io::{self, Write}, path::Path};

use crate::{error::RenderError,
            options::RenderOptions,
            printer::{IoPrinter, Printer, WriterPrinter},
            template::{Template, TextTemplate},
            trace_render, warn};

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    pub options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Renderer { options }
    }

    fn render_with<'p, T: Template + ?Sized>(
        &self,
        template: &T,
        printer: impl Printer + 'p,
    ) -> Result<(), RenderError> {
        let mut t = TextTemplate::with_printer(&self.options, printer);
        template.render(&mut t)?;
        Ok(())
    }

    pub fn render_to_text<T: Template + ?Sized>(&self, template: &T) -> Result<String, RenderError> {
        self.render_to_writer(template, String::new())
    }

    /// Render into a character sink, handing it back afterwards.
    pub fn render_to_writer<T: Template + ?Sized, W: fmt::Write>(
        &self,
        template: &T,
        writer: W,
    ) -> Result<W, RenderError> {
        trace_render!("render pass into character sink");
        let mut writer = writer;
        self.render_with(template, WriterPrinter::new(&mut writer))?;
        Ok(writer)
    }

    /// Render into a byte stream (as UTF-8). `out` is flushed and
    /// dropped before returning, on success and on failure. An error
    /// from the pass wins over one from flushing.
    pub fn render_to_stream<T: Template + ?Sized, W: io::Write>(
        &self,
        template: &T,
        out: W,
    ) -> Result<(), RenderError> {
        trace_render!("render pass into byte stream");
        let mut out = out;
        let rendered = self.render_with(template, IoPrinter::new(&mut out));
        let flushed = out.flush();
        drop(out);
        match (rendered, flushed) {
            (Ok(()), flushed) => Ok(flushed?),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(flush_error)) => {
                warn!("flushing after failed render pass: {flush_error}");
                Err(e)
            }
        }
    }

    /// Render into the file at `path`, creating or truncating it.
    pub fn render_to_file<T: Template + ?Sized>(
        &self,
        template: &T,
        path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let path = path.as_ref();
        trace_render!("render pass into file {path:?}");
        let file = File::create(path).map_err(
            |source| RenderError::Open { path: path.to_owned(), source })?;
        self.render_to_stream(template, file)
    }
}
