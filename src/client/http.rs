//! HTTP implementation of the target client

use super::{RequestFailure, TargetClient, TargetResponse};
use crate::error::{Error, Result};

use async_trait::async_trait;
use std::time::Duration;

/// Per-request timeout applied to every GET
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Target client backed by a pooled reqwest client
///
/// The inner client keeps connections alive between calls, so a run against
/// one target pays connection setup once per pool slot rather than once per
/// request.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    url: reqwest::Url,
    timeout: Duration,
}

impl HttpClient {
    /// Create a client for the given target URL with the default timeout
    pub fn new(url: &str) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit per-request timeout
    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(Error::config("target URL must not be empty"));
        }

        let url = reqwest::Url::parse(trimmed)
            .map_err(|e| Error::config(format!("invalid target URL {trimmed:?}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "unsupported URL scheme {:?}: only http and https targets are supported",
                url.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }
}

#[async_trait]
impl TargetClient for HttpClient {
    fn target_url(&self) -> &str {
        self.url.as_str()
    }

    async fn execute(&self) -> std::result::Result<TargetResponse, RequestFailure> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| RequestFailure::from_reqwest(e, self.timeout))?;

        let status = response.status().as_u16();

        // Drain the body whatever the status, so the connection goes back to
        // the pool instead of being torn down mid-stream.
        let body = response
            .bytes()
            .await
            .map_err(|e| RequestFailure::from_reqwest(e, self.timeout))?;

        Ok(TargetResponse {
            status,
            bytes_read: body.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new("http://localhost:8080/healthz").unwrap();
        assert_eq!(client.target_url(), "http://localhost:8080/healthz");
    }

    #[test]
    fn test_client_rejects_empty_url() {
        let result = HttpClient::new("");
        assert!(result.is_err());

        let result = HttpClient::new("   ");
        assert!(result.is_err());
    }

    #[test]
    fn test_client_rejects_invalid_url() {
        let result = HttpClient::new("not a url");
        assert!(result.is_err());
    }

    #[test]
    fn test_client_rejects_non_http_scheme() {
        let result = HttpClient::new("ftp://example.com/file");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(10));
    }
}
