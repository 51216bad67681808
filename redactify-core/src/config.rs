//! Redactor configuration

use crate::error::Error;
use crate::language::Language;
use crate::policy::Policy;
use std::path::{Path, PathBuf};

/// Processing configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) default_policy: Policy,
    pub(crate) engine_config: Option<PathBuf>,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default language for new sessions
    pub fn language(&self) -> Language {
        self.language
    }

    /// Policy used when a call does not name one
    pub fn default_policy(&self) -> Policy {
        self.default_policy
    }

    /// Configuration file handed through to the external engine
    pub fn engine_config(&self) -> Option<&Path> {
        self.engine_config.as_deref()
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(path) = &self.engine_config {
            if path.as_os_str().is_empty() {
                return Err(Error::Configuration(
                    "engine config path must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    default_policy: Option<String>,
    engine_config: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default language by code or display name
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the default policy by name (case-insensitive)
    pub fn default_policy(mut self, policy: impl Into<String>) -> Self {
        self.default_policy = Some(policy.into());
        self
    }

    /// Set the engine configuration file passed to each engine invocation
    pub fn engine_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.engine_config = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(language) = self.language {
            config.language = language.parse()?;
        }

        if let Some(policy) = self.default_policy {
            config.default_policy = policy.parse()?;
        }

        config.engine_config = self.engine_config;

        config.validate()?;
        Ok(config)
    }
}
