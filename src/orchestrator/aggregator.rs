//! Worker-level tally aggregation
//!
//! These totals come from the workers' own counters and feed the run
//! completion log line. The user-facing report is computed separately from
//! the collected outcomes in [`crate::report`].

use std::time::Duration;

use crate::worker::WorkerStats;

/// Aggregated tallies from all workers
#[derive(Debug, Clone, Default)]
pub struct AggregatedStats {
    /// Number of workers that completed
    pub total_workers: usize,

    /// Total transported responses across all workers
    pub total_completed: usize,

    /// Total transport failures across all workers
    pub total_errors: usize,

    /// Total response body bytes drained
    pub total_bytes: u64,

    /// Maximum duration across all workers
    pub total_duration: Duration,

    /// Overall requests per second (responses and failures both count)
    pub requests_per_second: f64,
}

impl AggregatedStats {
    /// Get the total number of requests (completed + errors)
    pub fn total_requests(&self) -> usize {
        self.total_completed + self.total_errors
    }
}

/// Aggregate tallies from multiple workers
pub fn aggregate_worker_stats(stats: &[WorkerStats]) -> AggregatedStats {
    if stats.is_empty() {
        return AggregatedStats::default();
    }

    let total_completed: usize = stats.iter().map(|s| s.completed).sum();
    let total_errors: usize = stats.iter().map(|s| s.errors).sum();
    let total_bytes: u64 = stats.iter().map(|s| s.bytes_read).sum();

    // Use the maximum elapsed time across all workers
    let total_duration = stats
        .iter()
        .filter_map(|s| s.elapsed())
        .max()
        .unwrap_or(Duration::ZERO);

    let secs = total_duration.as_secs_f64();
    let requests_per_second = if secs > 0.0 {
        (total_completed + total_errors) as f64 / secs
    } else {
        0.0
    };

    AggregatedStats {
        total_workers: stats.len(),
        total_completed,
        total_errors,
        total_bytes,
        total_duration,
        requests_per_second,
    }
}
