//! Target client abstraction
//!
//! The [`TargetClient`] trait is the seam between the worker pool and the
//! network: the real implementation lives in [`http`], and tests substitute
//! stub clients to drive the engine deterministically.

mod http;

pub use http::{HttpClient, DEFAULT_TIMEOUT};

use async_trait::async_trait;
use std::time::Duration;

/// Client executing one request per call against a fixed target
///
/// Implementations handle transport details while presenting a unified
/// interface to the worker. One instance is shared across the pool via `Arc`,
/// so implementations must reuse connections internally rather than opening
/// one per call.
#[async_trait]
pub trait TargetClient: Send + Sync {
    /// The target this client issues requests against (for logging)
    fn target_url(&self) -> &str;

    /// Perform one GET against the target
    ///
    /// The response body must be fully drained before returning so the
    /// underlying connection can be reused, whatever the status code.
    async fn execute(&self) -> std::result::Result<TargetResponse, RequestFailure>;
}

/// The observable result of one successfully transported request
///
/// "Successfully transported" means a status line and full body arrived;
/// error statuses (4xx/5xx) still land here. Success/failure classification
/// happens later, in the report.
#[derive(Debug, Clone, Copy)]
pub struct TargetResponse {
    /// HTTP status code of the response
    pub status: u16,

    /// Number of body bytes drained
    pub bytes_read: u64,
}

/// Transport-level request failures
///
/// These never stop the worker or the pool: each one is recorded in an
/// outcome and the worker moves on to the next token. No retries.
#[derive(Debug, thiserror::Error)]
pub enum RequestFailure {
    /// The request did not complete within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection could not be established (refused, DNS, TLS handshake)
    #[error("connection failed: {0}")]
    Connect(String),

    /// The response body could not be read to completion
    #[error("failed reading response body: {0}")]
    Body(String),

    /// Any other transport error
    #[error("request failed: {0}")]
    Transport(String),
}

impl RequestFailure {
    /// Classify a reqwest error into the failure taxonomy
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            RequestFailure::Timeout(timeout)
        } else if err.is_connect() {
            RequestFailure::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            RequestFailure::Body(err.to_string())
        } else {
            RequestFailure::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        let failure = RequestFailure::Timeout(Duration::from_secs(10));
        assert_eq!(failure.to_string(), "request timed out after 10s");

        let failure = RequestFailure::Connect("connection refused".into());
        assert_eq!(failure.to_string(), "connection failed: connection refused");
    }
}
