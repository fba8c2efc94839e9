//! Orchestrator for run lifecycle management
//!
//! The Orchestrator coordinates a complete load run:
//! - Spawning the worker pool against the shared work queue
//! - Waiting on the join barrier until every worker has terminated
//! - Closing the outcome collector so it can be drained to completion
//!
//! # Example
//!
//! ```ignore
//! use httpblast::OrchestratorBuilder;
//!
//! let (orchestrator, mut outcome_rx) = OrchestratorBuilder::new()
//!     .requests(1000)
//!     .concurrency(10)
//!     .client(client)
//!     .build()?;
//!
//! let worker_stats = orchestrator.run().await?;
//! let mut outcomes = Vec::new();
//! while let Some(outcome) = outcome_rx.recv().await {
//!     outcomes.push(outcome);
//! }
//! ```

mod aggregator;
mod builder;
mod executor;

pub use aggregator::{aggregate_worker_stats, AggregatedStats};
pub use builder::OrchestratorBuilder;
pub use executor::Orchestrator;
