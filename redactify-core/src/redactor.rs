//! Request adapter between the UI surface and the external engine

use crate::config::Config;
use crate::engine::{EngineRequest, PiiEngine};
use crate::error::Result;
use crate::highlight;
use crate::policy::Policy;
use crate::session::Session;
use std::sync::Arc;

/// Result of one processing call
///
/// Carries the raw marked-up text; the highlighted HTML rendition is derived
/// on demand, so one adapter serves both presentation modes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transformed {
    text: String,
}

impl Transformed {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// The transformed text with plain entity markers
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the result, returning the plain text
    pub fn into_text(self) -> String {
        self.text
    }

    /// True for the short-circuit result of an empty input
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Render the markers as highlighted HTML
    pub fn to_html(&self) -> String {
        highlight::render(&self.text)
    }
}

impl From<String> for Transformed {
    /// Wrap already-marked engine output, e.g. for offline highlighting
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for Transformed {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Adapter that validates a request, invokes the engine, and wraps the result
pub struct Redactor {
    engine: Arc<dyn PiiEngine>,
    config: Config,
}

impl Redactor {
    /// Create a redactor with default configuration
    pub fn new(engine: Arc<dyn PiiEngine>) -> Self {
        Self {
            engine,
            config: Config::default(),
        }
    }

    /// Create a redactor with custom configuration
    pub fn with_config(engine: Arc<dyn PiiEngine>, config: Config) -> Self {
        Self { engine, config }
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Transform a text buffer under the given policy
    ///
    /// The session's language is read at call time, so a language change
    /// affects every subsequent call. Empty input short-circuits with a
    /// warning and never reaches the engine.
    pub fn process(&self, session: &Session, text: &str, policy: Policy) -> Result<Transformed> {
        if text.is_empty() {
            log::warn!("no text present");
            return Ok(Transformed::empty());
        }

        let request = EngineRequest::new(
            text,
            session.language(),
            policy,
            self.config.engine_config(),
        );
        let output = self.engine.transform(&request)?;
        log::debug!("engine output: {output}");

        Ok(Transformed::new(output))
    }

    /// Like [`Redactor::process`], with the policy given by name
    ///
    /// Parsing is case-insensitive; the name is normalized to lowercase
    /// before the request is built.
    pub fn process_named(
        &self,
        session: &Session,
        text: &str,
        policy: &str,
    ) -> Result<Transformed> {
        let policy = policy.parse()?;
        self.process(session, text, policy)
    }

    /// Transform under the configured default policy
    pub fn process_default(&self, session: &Session, text: &str) -> Result<Transformed> {
        self.process(session, text, self.config.default_policy())
    }
}
