//! Per-request outcome records

use crate::client::RequestFailure;
use crate::queue::WorkToken;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The recorded result of executing one work token
///
/// Exactly one outcome is produced per claimed token, failures included, so
/// the number of collected outcomes always equals the number of requests
/// configured for the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    /// Request id (the claim index of the token that produced this outcome)
    pub request_id: u64,

    /// HTTP status code, absent when the request failed in transport
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    /// Wall-clock time from request start to body fully consumed
    pub duration: Duration,

    /// Transport failure description, absent on any transported response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Number of response body bytes drained
    pub bytes_read: u64,

    /// When the request finished
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

impl Outcome {
    /// Record a transported response (any status code)
    pub fn response(token: WorkToken, status: u16, duration: Duration, bytes_read: u64) -> Self {
        Self {
            request_id: token.index() as u64,
            status_code: Some(status),
            duration,
            error: None,
            bytes_read,
            completed_at: chrono::Utc::now(),
        }
    }

    /// Record a transport failure
    pub fn failure(token: WorkToken, duration: Duration, failure: &RequestFailure) -> Self {
        Self {
            request_id: token.index() as u64,
            status_code: None,
            duration,
            error: Some(failure.to_string()),
            bytes_read: 0,
            completed_at: chrono::Utc::now(),
        }
    }

    /// Whether this outcome counts as a success
    ///
    /// Success means the request was transported and the status code is below
    /// 400. Error statuses are failures even though no transport error
    /// occurred.
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.status_code.is_some_and(|status| status < 400)
    }

    /// Whether this outcome counts as a failure
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }
}
