//! Orchestrator execution logic

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::client::TargetClient;
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::queue::WorkQueue;
use crate::worker::{WorkerBuilder, WorkerStats};

use super::aggregator::aggregate_worker_stats;

/// Orchestrator manages the run lifecycle
///
/// Responsible for spawning workers, waiting for all of them to finish (the
/// join barrier), and closing the outcome collector so the receiver drains to
/// completion. Use `OrchestratorBuilder` to construct one together with the
/// outcome receiver.
pub struct Orchestrator {
    /// Run configuration
    pub(crate) config: RunConfig,

    /// Target client (shared across workers)
    pub(crate) client: Arc<dyn TargetClient>,

    /// Work queue pre-loaded with one token per request
    pub(crate) queue: Arc<WorkQueue>,

    /// Outcome sender (cloned for each worker)
    pub(crate) outcome_tx: mpsc::Sender<Outcome>,
}

impl Orchestrator {
    /// Create a new orchestrator
    ///
    /// Use `OrchestratorBuilder` for a more ergonomic construction.
    pub fn new(
        config: RunConfig,
        client: Arc<dyn TargetClient>,
        outcome_tx: mpsc::Sender<Outcome>,
    ) -> Self {
        let queue = Arc::new(WorkQueue::new(config.total_requests));

        Self {
            config,
            client,
            queue,
            outcome_tx,
        }
    }

    /// Get the run configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the load test to completion
    ///
    /// Spawns the worker pool, waits for every worker to terminate, and
    /// returns the per-worker stats. Consumes the orchestrator: once the
    /// join barrier has passed, the last outcome sender is dropped, so the
    /// receiver handed out at build time yields exactly one outcome per
    /// request and then `None`.
    pub async fn run(self) -> Result<Vec<WorkerStats>> {
        let start = Instant::now();

        tracing::info!(
            target_url = %self.client.target_url(),
            requests = self.config.total_requests,
            concurrency = self.config.concurrency,
            "starting load run"
        );

        let mut handles = Vec::with_capacity(self.config.concurrency);
        for worker_id in 0..self.config.concurrency {
            let worker = WorkerBuilder::new(worker_id)
                .client(Arc::clone(&self.client))
                .queue(Arc::clone(&self.queue))
                .outcome_tx(self.outcome_tx.clone())
                .build()?;

            handles.push(tokio::spawn(worker.run()));
        }

        // The workers' sender clones are now the only other handles; dropping
        // ours means the channel closes as soon as the last worker exits.
        drop(self.outcome_tx);

        // Join barrier: nothing downstream runs until every worker is done.
        let mut results = Vec::with_capacity(handles.len());
        let mut panicked = 0;
        for (worker_id, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(stats) => {
                    tracing::debug!(
                        worker_id,
                        completed = stats.completed,
                        errors = stats.errors,
                        "worker joined"
                    );
                    results.push(stats);
                }
                Err(e) => {
                    panicked += 1;
                    tracing::error!(worker_id, error = %e, "worker task panicked");
                    // Continue collecting the remaining workers.
                }
            }
        }

        if results.is_empty() && panicked > 0 {
            return Err(Error::worker(format!(
                "all {panicked} workers failed to complete"
            )));
        }

        let elapsed = start.elapsed();
        let totals = aggregate_worker_stats(&results);
        tracing::info!(
            elapsed_secs = elapsed.as_secs_f64(),
            completed = totals.total_completed,
            errors = totals.total_errors,
            rps = totals.requests_per_second,
            "load run complete"
        );

        Ok(results)
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("config", &self.config)
            .field("target", &self.client.target_url())
            .finish()
    }
}
