//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("example.txt".to_string());
        assert_eq!(error.to_string(), "File not found: example.txt");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("no engine command configured".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: no engine command configured"
        );
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("engine exited with code 1".to_string());
        assert_eq!(
            error.to_string(),
            "Processing error: engine exited with code 1"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::FileNotFound("example.txt".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("FileNotFound"));
        assert!(debug_str.contains("example.txt"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("ok".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(anyhow::anyhow!("boom"));
        assert!(failure.is_err());
    }
}
