//! Example corpus
//!
//! A read-only list of example texts loaded once at startup. The display
//! layer shows truncated labels; `full_example` gives back the untruncated
//! text for a label's position.

use crate::error::{Error, Result};
use std::path::Path;

/// Number of characters shown in a truncated label
pub const LABEL_WIDTH: usize = 50;

/// Ordered, read-only example texts
#[derive(Debug, Clone, Default)]
pub struct ExampleCorpus {
    examples: Vec<String>,
}

impl ExampleCorpus {
    /// Load a corpus from a newline-separated text file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ResourceNotFound {
                path: path.display().to_string(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Build a corpus from in-memory text, one example per line
    pub fn from_text(text: &str) -> Self {
        Self {
            examples: text.lines().map(str::to_string).collect(),
        }
    }

    /// Number of examples
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// True when the corpus holds no examples
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Iterate over the full example texts
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.examples.iter().map(String::as_str)
    }

    /// The untruncated example at `index`
    pub fn full_example(&self, index: usize) -> Result<&str> {
        self.examples
            .get(index)
            .map(String::as_str)
            .ok_or(Error::ExampleOutOfRange {
                index,
                len: self.examples.len(),
            })
    }

    /// Truncated display labels, one per example, in corpus order
    ///
    /// First [`LABEL_WIDTH`] characters (not bytes) plus a `...` suffix,
    /// matching the original dropdown labels.
    pub fn truncated_labels(&self) -> Vec<String> {
        self.examples
            .iter()
            .map(|example| {
                let mut label: String = example.chars().take(LABEL_WIDTH).collect();
                label.push_str("...");
                label
            })
            .collect()
    }
}
