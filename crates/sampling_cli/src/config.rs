//! CLI configuration management.
//!
//! Handles loading of `sampling.toml` with environment variable override
//! support. A missing file is not an error; defaults apply.

use serde::Deserialize;
use std::path::Path;

use sampling_core::rng::RandomMode;

/// Log levels accepted in `log_level`.
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    /// Random source used for sampling
    #[serde(default)]
    pub mode: RandomMode,

    /// Default tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            mode: RandomMode::default(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Recognised keys: `SAMPLING_MODE`, `SAMPLING_LOG_LEVEL`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup("SAMPLING_MODE") {
            self.mode = mode
                .parse()
                .map_err(|e: sampling_core::SamplingError| ConfigError::Parse(e.to_string()))?;
        }

        if let Some(log_level) = lookup("SAMPLING_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            )));
        }
        Ok(())
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file or override
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}
