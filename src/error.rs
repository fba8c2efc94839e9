//! Error types for httpblast

use thiserror::Error;

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A required builder field was not set
    #[error("missing required field: {0}")]
    MissingConfig(&'static str),

    /// Worker pool error
    #[error("worker error: {0}")]
    Worker(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Create a missing-field error for builder validation
    pub fn missing_config(field: &'static str) -> Self {
        Error::MissingConfig(field)
    }

    /// Create a worker pool error
    pub fn worker(message: impl Into<String>) -> Self {
        Error::Worker(message.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("bad value");
        assert_eq!(err.to_string(), "configuration error: bad value");

        let err = Error::missing_config("client");
        assert_eq!(err.to_string(), "missing required field: client");
    }
}
