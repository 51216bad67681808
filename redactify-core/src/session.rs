//! Per-session language selection
//!
//! The original demo kept the selected language in a process-wide mutable
//! variable, so concurrent sessions raced on it. Here the selection is an
//! explicit value owned by the caller and threaded into each processing call.

use crate::error::Error;
use crate::language::Language;

/// Mutable per-session state read by every processing call
#[derive(Debug, Clone, Default)]
pub struct Session {
    language: Language,
}

impl Session {
    /// Create a session with the default language (English)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a specific language
    pub fn with_language(language: Language) -> Self {
        Self { language }
    }

    /// Select a language by its display name, e.g. "Italian"
    ///
    /// Logs an informational notice naming the selection, mirroring the
    /// original UI behavior.
    pub fn select_language(&mut self, name: &str) -> Result<Language, Error> {
        let language = Language::from_name(name)?;
        self.language = language;
        log::info!("{} selected", language.name());
        Ok(language)
    }

    /// Overwrite the selection directly
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// The currently selected language
    pub fn language(&self) -> Language {
        self.language
    }
}
