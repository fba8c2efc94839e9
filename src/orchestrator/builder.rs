//! Builder pattern for Orchestrator construction

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::TargetClient;
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::outcome::Outcome;

use super::executor::Orchestrator;

/// Builder for creating an Orchestrator with proper configuration
///
/// # Example
///
/// ```ignore
/// let (orchestrator, outcome_rx) = OrchestratorBuilder::new()
///     .requests(1000)
///     .concurrency(10)
///     .client(client)
///     .build()?;
/// ```
pub struct OrchestratorBuilder {
    config: RunConfig,
    client: Option<Arc<dyn TargetClient>>,
}

impl OrchestratorBuilder {
    /// Create a new orchestrator builder with default configuration
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
            client: None,
        }
    }

    /// Set the full run configuration
    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the total request count
    pub fn requests(mut self, total_requests: usize) -> Self {
        self.config.total_requests = total_requests;
        self
    }

    /// Set the concurrency level
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    /// Set the target client
    pub fn client(mut self, client: Arc<dyn TargetClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the orchestrator and return it along with the outcome receiver
    ///
    /// # Errors
    ///
    /// Returns an error if the client is not set or if configuration
    /// validation fails.
    pub fn build(self) -> Result<(Orchestrator, mpsc::Receiver<Outcome>)> {
        let client = self
            .client
            .ok_or_else(|| Error::missing_config("client"))?;

        self.config
            .validate()
            .map_err(|e| Error::config(e.to_string()))?;

        // The receiver is drained only after the join barrier, so the buffer
        // must hold every outcome or the workers would block forever.
        let buffer = self.config.total_requests.max(1);
        let (outcome_tx, outcome_rx) = mpsc::channel(buffer);

        let orchestrator = Orchestrator::new(self.config, client, outcome_tx);

        Ok((orchestrator, outcome_rx))
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
