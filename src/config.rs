//! Run configuration types

use serde::{Deserialize, Serialize};

/// Load run configuration
///
/// Defines how a run should be shaped: how many requests to send in total
/// and how many workers send them concurrently. The target itself lives in
/// the client, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Total number of requests to send
    pub total_requests: usize,

    /// Number of concurrent worker tasks
    pub concurrency: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            total_requests: 100,
            concurrency: 10,
        }
    }
}

impl RunConfig {
    /// Create a new config with the given request count and concurrency
    pub fn new(total_requests: usize, concurrency: usize) -> Self {
        Self {
            total_requests,
            concurrency,
        }
    }

    /// Validate the configuration
    ///
    /// A zero request count is valid: the run completes immediately and the
    /// report shows zeros. A zero worker count is not — nothing would ever
    /// drain the queue.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency(
                "concurrency must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid concurrency value
    #[error("invalid concurrency: {0}")]
    InvalidConcurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.total_requests, 100);
        assert_eq!(config.concurrency, 10);
    }

    #[test]
    fn test_config_validation_valid() {
        let config = RunConfig::new(1000, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_concurrency() {
        let config = RunConfig::new(100, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_requests_allowed() {
        let config = RunConfig::new(0, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = RunConfig::new(500, 25);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RunConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.total_requests, 500);
        assert_eq!(deserialized.concurrency, 25);
    }
}
