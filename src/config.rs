//! Engine configuration.
//!
//! A config is plain JSON; every field is optional:
//!
//! ```json
//! { "seed": 42, "log_capacity": 6 }
//! ```

use std::path::Path;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::engine::DEFAULT_LOG_CAPACITY;

/// Settings for a new [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Seed for the grid RNG. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Number of descriptions the operation log retains.
    pub log_capacity: usize,
}

impl EngineConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_capacity == 0 {
            return Err(ConfigError::InvalidCapacity);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

/// Errors that can occur while loading a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("log_capacity must be at least 1")]
    InvalidCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.log_capacity, 6);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_full_config() {
        let config = EngineConfig::from_json(r#"{ "seed": 42, "log_capacity": 10 }"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_capacity, 10);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            EngineConfig::from_json(r#"{ "log_capacity": 0 }"#),
            Err(ConfigError::InvalidCapacity)
        );
        assert!(matches!(
            EngineConfig::from_json(r#"{ "sead": 1 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/nonexistent/tricube.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
