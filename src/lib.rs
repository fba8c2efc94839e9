//! httpblast: concurrent HTTP load generation
//!
//! This crate implements a small load-testing engine and the CLI around it:
//!
//! - A work queue pre-loaded with one token per request
//! - A pool of concurrent workers executing GET requests against a target
//! - An outcome channel collecting one record per request
//! - A report aggregator folding the outcomes into summary statistics

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod outcome;
pub mod queue;
pub mod report;
pub mod worker;

pub use client::{HttpClient, RequestFailure, TargetClient, TargetResponse, DEFAULT_TIMEOUT};
pub use config::{ConfigError, RunConfig};
pub use error::{Error, Result};
pub use orchestrator::{aggregate_worker_stats, AggregatedStats, Orchestrator, OrchestratorBuilder};
pub use outcome::Outcome;
pub use queue::{WorkQueue, WorkToken};
pub use report::{LatencyPercentiles, LoadReport};
pub use worker::{Worker, WorkerBuilder, WorkerStats};
