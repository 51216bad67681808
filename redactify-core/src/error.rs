//! Core error types

use thiserror::Error;

/// Error type for redaction operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Failure reported by the external PII engine
    #[error("engine invocation failed: {0}")]
    Engine(String),

    /// A required on-disk resource is missing
    #[error("resource not found: {path}")]
    ResourceNotFound {
        /// Path of the missing resource
        path: String,
    },

    /// Unrecognized language name or code
    #[error("unknown language: {0}")]
    InvalidLanguage(String),

    /// Unrecognized policy name
    #[error("unknown policy: {0}")]
    InvalidPolicy(String),

    /// Example index outside the loaded corpus
    #[error("example index {index} out of range (corpus has {len} examples)")]
    ExampleOutOfRange {
        /// The requested index
        index: usize,
        /// Number of examples in the corpus
        len: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for redaction operations
pub type Result<T> = std::result::Result<T, Error>;
