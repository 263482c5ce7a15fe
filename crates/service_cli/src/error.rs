//! Error types for the copula CLI.

use copula_core::types::CopulaError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine validation failure
    #[error("Copula error: {0}")]
    Copula(#[from] CopulaError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: CliError = CopulaError::parameter("variance", "too large").into();
        assert_eq!(
            err.to_string(),
            "Copula error: Parameter error: variance too large"
        );

        let err: CliError = ConfigError::InvalidLogLevel("loud".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error: Invalid log level: loud"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CliError = io.into();
        assert!(matches!(err, CliError::Io(_)));
    }
}
