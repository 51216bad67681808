//! Highlighted HTML output formatter

use super::OutputFormatter;
use anyhow::Result;
use redactify_core::Transformed;
use std::io::Write;

/// HTML formatter - outputs the transformed text with markers highlighted
/// and wrapped in a whitespace-preserving container
pub struct HtmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn write_result(&mut self, result: &Transformed) -> Result<()> {
        if !result.is_empty() {
            writeln!(self.writer, "{}", result.to_html())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
