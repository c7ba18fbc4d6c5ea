//! Destinations for generated stylesheets.
//!
//! The registry only produces text. Putting that text into a live document
//! (a `<style>` element, a file served next to server-rendered markup) is the
//! job of a [`StyleSink`].

use std::io::{self, Write};

/// Receives a rendered stylesheet.
pub trait StyleSink {
    /// Attach a stylesheet, e.g. by creating a style element containing `css`.
    fn attach_style(&mut self, css: &str) -> io::Result<()>;
}

/// Appends the stylesheet to the string.
impl StyleSink for String {
    fn attach_style(&mut self, css: &str) -> io::Result<()> {
        self.push_str(css);
        Ok(())
    }
}

/// Writes stylesheets to any [`Write`] implementation.
///
/// # Example
///
/// ```
/// use smartcss::sink::{StyleSink, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.attach_style(".a{color:red;}").unwrap();
/// assert_eq!(sink.into_inner(), b".a{color:red;}");
/// ```
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StyleSink for WriterSink<W> {
    fn attach_style(&mut self, css: &str) -> io::Result<()> {
        self.writer.write_all(css.as_bytes())?;
        self.writer.flush()
    }
}
