//! Worker execution loop

use crate::client::TargetClient;
use crate::outcome::Outcome;
use crate::queue::{WorkQueue, WorkToken};

use super::stats::WorkerStats;

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Worker executes requests in a loop: claim -> execute -> publish -> repeat
///
/// Workers are stateless tokio tasks managed by the Orchestrator. They share
/// the work queue and the target client via `Arc`, and send outcomes through
/// an mpsc channel. A worker runs until the queue is exhausted; it has no
/// per-worker quota, so fast workers pick up the slack of slow ones.
pub struct Worker {
    /// Unique worker identifier
    id: usize,

    /// Target client (shared across workers via Arc)
    client: Arc<dyn TargetClient>,

    /// Work queue (shared across workers via Arc)
    queue: Arc<WorkQueue>,

    /// Channel sender for per-request outcomes
    outcome_tx: mpsc::Sender<Outcome>,
}

impl Worker {
    /// Create a new worker
    pub fn new(
        id: usize,
        client: Arc<dyn TargetClient>,
        queue: Arc<WorkQueue>,
        outcome_tx: mpsc::Sender<Outcome>,
    ) -> Self {
        Self {
            id,
            client,
            queue,
            outcome_tx,
        }
    }

    /// Run the worker loop until the queue is exhausted
    ///
    /// Returns this worker's stats. Request failures are recorded and do not
    /// stop the loop; there is no fatal path once the worker has started.
    pub async fn run(self) -> WorkerStats {
        let mut stats = WorkerStats::new();
        stats.start();

        tracing::debug!(worker_id = self.id, "worker started");

        while let Some(token) = self.queue.claim() {
            let outcome = self.execute_one(token).await;

            match outcome.error {
                None => stats.record_response(outcome.bytes_read),
                Some(_) => stats.record_error(),
            }

            // Every claimed token yields exactly one outcome, failures
            // included.
            if self.outcome_tx.send(outcome).await.is_err() {
                tracing::debug!(
                    worker_id = self.id,
                    "outcome channel closed, worker stopping"
                );
                break;
            }
        }

        stats.stop();
        tracing::debug!(
            worker_id = self.id,
            completed = stats.completed,
            errors = stats.errors,
            elapsed_ms = ?stats.elapsed().map(|d| d.as_millis()),
            "worker finished"
        );

        stats
    }

    /// Execute a single request and build its outcome
    async fn execute_one(&self, token: WorkToken) -> Outcome {
        let start = Instant::now();

        match self.client.execute().await {
            Ok(response) => {
                Outcome::response(token, response.status, start.elapsed(), response.bytes_read)
            }
            Err(failure) => {
                tracing::warn!(
                    worker_id = self.id,
                    request_id = token.index(),
                    error = %failure,
                    "request failed"
                );
                Outcome::failure(token, start.elapsed(), &failure)
            }
        }
    }

    /// Get the worker ID
    pub fn id(&self) -> usize {
        self.id
    }
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker")
            .field("id", &self.id)
            .field("target", &self.client.target_url())
            .field("queue_remaining", &self.queue.remaining())
            .finish()
    }
}
