//! Sinks that templates print into.

use std::{fmt, io};

use crate::{error::RenderError, warn};

/// Takes values and writes their textual form to some destination,
/// in call order and without buffering.
pub trait Printer {
    fn print(&mut self, value: &dyn fmt::Display) -> Result<(), RenderError>;
}

impl<P: Printer + ?Sized> Printer for &mut P {
    fn print(&mut self, value: &dyn fmt::Display) -> Result<(), RenderError> {
        (**self).print(value)
    }
}

impl<P: Printer + ?Sized> Printer for Box<P> {
    fn print(&mut self, value: &dyn fmt::Display) -> Result<(), RenderError> {
        (**self).print(value)
    }
}

/// Placeholder until a real printer is attached; fails every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPrinter;

impl Printer for NullPrinter {
    fn print(&mut self, _value: &dyn fmt::Display) -> Result<(), RenderError> {
        warn!("print called on a template without a printer");
        Err(RenderError::UnconfiguredSink)
    }
}

/// Printer over a character sink, e.g. `&mut String`.
#[derive(Debug)]
pub struct WriterPrinter<W: fmt::Write> {
    writer: W,
}

impl<W: fmt::Write> WriterPrinter<W> {
    pub fn new(writer: W) -> Self {
        WriterPrinter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: fmt::Write> Printer for WriterPrinter<W> {
    fn print(&mut self, value: &dyn fmt::Display) -> Result<(), RenderError> {
        write!(self.writer, "{value}")?;
        Ok(())
    }
}

/// Printer over a byte stream; text is written as UTF-8.
#[derive(Debug)]
pub struct IoPrinter<W: io::Write> {
    out: W,
}

impl<W: io::Write> IoPrinter<W> {
    pub fn new(out: W) -> Self {
        IoPrinter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> Printer for IoPrinter<W> {
    fn print(&mut self, value: &dyn fmt::Display) -> Result<(), RenderError> {
        write!(self.out, "{value}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_null_printer_fails() {
        let mut p = NullPrinter;
        assert!(p.print(&"x").unwrap_err().is_unconfigured_sink());
    }

    #[test]
    fn t_writer_printer() {
        let mut s = String::new();
        {
            let mut p = WriterPrinter::new(&mut s);
            p.print(&"a").unwrap();
            p.print(&42).unwrap();
            p.print(&'c').unwrap();
        }
        assert_eq!(s, "a42c");
    }

    #[test]
    fn t_io_printer_utf8() {
        let mut p = IoPrinter::new(Vec::new());
        p.print(&"Grüße").unwrap();
        p.print(&1.5).unwrap();
        assert_eq!(p.into_inner(), "Grüße1.5".as_bytes());
    }

    #[test]
    fn t_io_printer_error() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let mut p = IoPrinter::new(Broken);
        match p.print(&"x") {
            Err(RenderError::Destination(e)) => assert!(e.to_string().contains("disk on fire")),
            r => panic!("unexpected {r:?}"),
        }
    }
}
