//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use redactify_core::Transformed;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultData {
    /// Transformed text with literal entity markers
    pub text: String,
    /// Highlighted HTML rendition of the same text
    pub html: String,
}

/// JSON formatter - outputs both renditions of a processing result
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_result(&mut self, result: &Transformed) -> Result<()> {
        if !result.is_empty() {
            let data = ResultData {
                text: result.text().to_string(),
                html: result.to_html(),
            };
            serde_json::to_writer_pretty(&mut self.writer, &data)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
