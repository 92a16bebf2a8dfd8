//! Error types for the sampling CLI.

use thiserror::Error;

use crate::config::ConfigError;
use sampling_core::SamplingError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Sampling failed
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Population argument could not be parsed
    #[error("Invalid population '{0}'")]
    InvalidPopulation(String),

    /// Logging setup error
    #[error("Logging setup error: {0}")]
    Logging(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::from(SamplingError::SizeMismatch {
            expected: 5,
            allocated: 4,
        });
        assert!(err.to_string().starts_with("Sampling error"));

        let err = CliError::InvalidPopulation("1..".to_string());
        assert_eq!(err.to_string(), "Invalid population '1..'");
    }
}
