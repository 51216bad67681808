//! Output formatting module

use anyhow::{Context, Result};
use redactify_core::Transformed;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one processing result
    ///
    /// The empty-input short circuit produces no output.
    fn write_result(&mut self, result: &Transformed) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Open the destination for formatted output (a file, or stdout)
pub fn writer_for(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
