//! Text templates emitting nested tag markup.

//! A `Template` describes a document as a sequence of calls on a
//! `TextTemplate` builder (`print`, `println`, `text`, `tag` and the
//! tag shorthands). The builder forwards everything right away to its
//! `Printer`, the sink for one destination. `Renderer` runs a
//! template against a string, character sink, byte stream or file.

//! A `TextTemplate` must not be shared between concurrent render
//! passes; `Renderer` creates a new one for every pass.

pub mod warn;
pub mod error;
pub mod options;
pub mod printer;
pub mod template;
pub mod tags;
pub mod render;

#[doc(hidden)]
pub use log;

pub use error::RenderError;
pub use options::{LineEnding, RenderOptions};
pub use printer::{IoPrinter, NullPrinter, Printer, WriterPrinter};
pub use render::Renderer;
pub use template::{from_fn, FnTemplate, Template, TextTemplate};
