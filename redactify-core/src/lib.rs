//! Core library for the ReDactify PII redaction demo
//!
//! The heavy lifting (entity recognition, policy application, synthetic
//! value generation) happens in an external engine behind the
//! [`PiiEngine`] trait. This crate provides everything around that boundary:
//! language and policy types, per-session state, the request adapter, the
//! marker grammar with HTML highlighting, and the example corpus.

#![warn(missing_docs)]

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod language;
pub mod marker;
pub mod policy;
pub mod redactor;
pub mod session;

pub use config::{Config, ConfigBuilder};
pub use corpus::ExampleCorpus;
pub use engine::{CommandEngine, EngineRequest, PiiEngine};
pub use error::{Error, Result};
pub use language::Language;
pub use marker::Category;
pub use policy::Policy;
pub use redactor::{Redactor, Transformed};
pub use session::Session;

/// Render already-marked engine output as highlighted HTML
///
/// Convenience re-export of [`highlight::render`].
pub fn highlight_text(text: &str) -> String {
    highlight::render(text)
}
