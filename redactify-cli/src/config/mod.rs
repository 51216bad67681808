//! CLI configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// External engine configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Example corpus configuration
    #[serde(default)]
    pub examples: ExamplesConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ProcessingConfig {
    /// Default language (name or code) for processing
    pub default_language: String,

    /// Default redaction policy
    pub default_policy: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            default_policy: "annotate".to_string(),
        }
    }
}

/// External engine configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct EngineConfig {
    /// Engine executable invoked for each processing call
    pub command: Option<PathBuf>,

    /// Configuration file handed through to the engine
    pub config: Option<PathBuf>,
}

/// Example corpus configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ExamplesConfig {
    /// Newline-separated example file loaded at startup
    pub file: PathBuf,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("example.txt"),
        }
    }
}

/// Cache configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Directory the engine may use for model and plugin caches
    pub dir: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("app/cache"),
        }
    }
}

impl CacheConfig {
    /// Create the cache directory, logging the outcome
    ///
    /// Failure is a warning, not a fatal error: the engine will recreate its
    /// cache on demand.
    pub fn ensure(&self) {
        match std::fs::create_dir_all(&self.dir) {
            Ok(()) => log::info!("cache directory ready at {}", self.dir.display()),
            Err(err) => log::warn!("cache directory creation error: {err}"),
        }
    }
}
