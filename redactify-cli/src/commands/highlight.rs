//! Highlight command implementation
//!
//! Renders engine output that was produced elsewhere, without invoking the
//! engine. Useful for inspecting saved results.

use anyhow::Result;
use clap::Args;
use redactify_core::Transformed;
use std::path::PathBuf;

use crate::input::{self, FileReader};
use crate::output::{self, HtmlFormatter, OutputFormatter};

/// Arguments for the highlight command
#[derive(Debug, Args)]
pub struct HighlightArgs {
    /// Marked-up text to highlight
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input file with marked-up text (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl HighlightArgs {
    /// Execute the highlight command
    pub fn execute(&self) -> Result<()> {
        let text = match (&self.text, &self.input) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => FileReader::read_text(path)?,
            (None, None) => input::read_stdin()?,
        };

        let writer = output::writer_for(self.output.as_deref())?;
        let mut formatter = HtmlFormatter::new(writer);
        formatter.write_result(&Transformed::from(text))?;
        formatter.finish()?;

        Ok(())
    }
}
