//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use redactify_core::Transformed;
use std::io::Write;

/// Plain text formatter - outputs the transformed text with literal markers
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_result(&mut self, result: &Transformed) -> Result<()> {
        if !result.is_empty() {
            writeln!(self.writer, "{}", result.text())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
