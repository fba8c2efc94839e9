//! Builder pattern for Worker construction

use crate::client::TargetClient;
use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::queue::WorkQueue;

use super::executor::Worker;

use std::sync::Arc;
use tokio::sync::mpsc;

/// Builder for creating Worker instances
///
/// # Example
/// ```ignore
/// let worker = WorkerBuilder::new(0)
///     .client(client)
///     .queue(queue)
///     .outcome_tx(tx)
///     .build()?;
/// ```
pub struct WorkerBuilder {
    id: usize,
    client: Option<Arc<dyn TargetClient>>,
    queue: Option<Arc<WorkQueue>>,
    outcome_tx: Option<mpsc::Sender<Outcome>>,
}

impl WorkerBuilder {
    /// Create a new builder with the given worker ID
    pub fn new(id: usize) -> Self {
        Self {
            id,
            client: None,
            queue: None,
            outcome_tx: None,
        }
    }

    /// Set the target client
    pub fn client(mut self, client: Arc<dyn TargetClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the shared work queue
    pub fn queue(mut self, queue: Arc<WorkQueue>) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Set the outcome channel sender
    pub fn outcome_tx(mut self, tx: mpsc::Sender<Outcome>) -> Self {
        self.outcome_tx = Some(tx);
        self
    }

    /// Build the Worker
    ///
    /// # Errors
    /// Returns an error if any required field is missing.
    pub fn build(self) -> Result<Worker> {
        let client = self.client.ok_or(Error::missing_config("client"))?;
        let queue = self.queue.ok_or(Error::missing_config("queue"))?;
        let outcome_tx = self
            .outcome_tx
            .ok_or(Error::missing_config("outcome_tx"))?;

        Ok(Worker::new(self.id, client, queue, outcome_tx))
    }
}
