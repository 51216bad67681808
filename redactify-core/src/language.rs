//! Language type for the detection engine

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Languages supported by the PII detection engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// English ("en")
    #[default]
    English,
    /// Italian ("it")
    Italian,
    /// Spanish ("es")
    Spanish,
    /// Portuguese ("pt")
    Portuguese,
    /// German ("de")
    German,
    /// French ("fr")
    French,
}

impl Language {
    /// All supported languages, in display order
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Italian,
        Language::Spanish,
        Language::Portuguese,
        Language::German,
        Language::French,
    ];

    /// Create a Language from a language code
    pub fn from_code(code: &str) -> Result<Self, Error> {
        match code.to_lowercase().as_str() {
            "en" => Ok(Language::English),
            "it" => Ok(Language::Italian),
            "es" => Ok(Language::Spanish),
            "pt" => Ok(Language::Portuguese),
            "de" => Ok(Language::German),
            "fr" => Ok(Language::French),
            _ => Err(Error::InvalidLanguage(code.to_string())),
        }
    }

    /// Create a Language from its human-readable name
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name.to_lowercase().as_str() {
            "english" => Ok(Language::English),
            "italian" => Ok(Language::Italian),
            "spanish" => Ok(Language::Spanish),
            "portuguese" => Ok(Language::Portuguese),
            "german" => Ok(Language::German),
            "french" => Ok(Language::French),
            _ => Err(Error::InvalidLanguage(name.to_string())),
        }
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Italian => "it",
            Language::Spanish => "es",
            Language::Portuguese => "pt",
            Language::German => "de",
            Language::French => "fr",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Italian => "Italian",
            Language::Spanish => "Spanish",
            Language::Portuguese => "Portuguese",
            Language::German => "German",
            Language::French => "French",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts either a code ("it") or a display name ("Italian")
    fn from_str(s: &str) -> Result<Self, Error> {
        Language::from_code(s).or_else(|_| Language::from_name(s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_maps_all_supported_codes() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()).unwrap(), lang);
        }
    }

    #[test]
    fn from_name_maps_all_display_names() {
        for lang in Language::ALL {
            assert_eq!(Language::from_name(lang.name()).unwrap(), lang);
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Language::from_name("ITALIAN").unwrap(), Language::Italian);
        assert_eq!(Language::from_name("german").unwrap(), Language::German);
    }

    #[test]
    fn unknown_language_is_an_error() {
        assert!(matches!(
            Language::from_code("ja"),
            Err(Error::InvalidLanguage(_))
        ));
        assert!(matches!(
            Language::from_name("Klingon"),
            Err(Error::InvalidLanguage(_))
        ));
    }

    #[test]
    fn from_str_accepts_code_or_name() {
        assert_eq!("pt".parse::<Language>().unwrap(), Language::Portuguese);
        assert_eq!("Portuguese".parse::<Language>().unwrap(), Language::Portuguese);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::default().code(), "en");
    }
}
