//! Worker statistics tracking

use std::time::Instant;

/// Counters tracked by each worker
///
/// `completed` counts transported responses (any status code); `errors`
/// counts transport failures. Status-based success/failure classification is
/// the report's job, not the worker's.
#[derive(Debug, Default, Clone)]
pub struct WorkerStats {
    /// Number of requests that received a response
    pub completed: usize,

    /// Number of requests that failed in transport
    pub errors: usize,

    /// Total response body bytes drained
    pub bytes_read: u64,

    /// Worker start time
    pub started_at: Option<Instant>,

    /// Worker end time
    pub ended_at: Option<Instant>,
}

impl WorkerStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking (records start time)
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stop tracking (records end time)
    pub fn stop(&mut self) {
        self.ended_at = Some(Instant::now());
    }

    /// Get total number of requests (completed + errors)
    pub fn total_requests(&self) -> usize {
        self.completed + self.errors
    }

    /// Get the fraction of requests that were transported (0.0 - 1.0)
    pub fn completed_rate(&self) -> f64 {
        if self.total_requests() == 0 {
            0.0
        } else {
            self.completed as f64 / self.total_requests() as f64
        }
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> Option<std::time::Duration> {
        self.started_at.map(|start| {
            self.ended_at
                .map(|end| end.duration_since(start))
                .unwrap_or_else(|| start.elapsed())
        })
    }

    /// Get requests per second over this worker's lifetime
    pub fn requests_per_second(&self) -> f64 {
        self.elapsed()
            .map(|d| {
                let secs = d.as_secs_f64();
                if secs > 0.0 {
                    self.total_requests() as f64 / secs
                } else {
                    0.0
                }
            })
            .unwrap_or(0.0)
    }

    /// Record a transported response
    pub fn record_response(&mut self, bytes_read: u64) {
        self.completed += 1;
        self.bytes_read += bytes_read;
    }

    /// Record a transport failure
    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Merge stats from another worker
    pub fn merge(&mut self, other: &WorkerStats) {
        self.completed += other.completed;
        self.errors += other.errors;
        self.bytes_read += other.bytes_read;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_stats_defaults() {
        let stats = WorkerStats::default();
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.errors, 0);
        assert_eq!(stats.bytes_read, 0);
        assert!(stats.started_at.is_none());
        assert!(stats.ended_at.is_none());
    }

    #[test]
    fn test_worker_stats_total_requests() {
        let mut stats = WorkerStats::new();
        stats.completed = 10;
        stats.errors = 2;
        assert_eq!(stats.total_requests(), 12);
    }

    #[test]
    fn test_worker_stats_completed_rate() {
        let mut stats = WorkerStats::new();
        stats.completed = 8;
        stats.errors = 2;
        assert!((stats.completed_rate() - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_worker_stats_completed_rate_zero_requests() {
        let stats = WorkerStats::new();
        assert_eq!(stats.completed_rate(), 0.0);
    }

    #[test]
    fn test_worker_stats_record_response() {
        let mut stats = WorkerStats::new();
        stats.record_response(1024);
        stats.record_response(2048);

        assert_eq!(stats.completed, 2);
        assert_eq!(stats.bytes_read, 3072);
    }

    #[test]
    fn test_worker_stats_record_error() {
        let mut stats = WorkerStats::new();
        stats.record_error();
        stats.record_error();

        assert_eq!(stats.errors, 2);
        assert_eq!(stats.completed, 0);
    }

    #[test]
    fn test_worker_stats_merge() {
        let mut stats1 = WorkerStats::new();
        stats1.completed = 10;
        stats1.errors = 1;
        stats1.bytes_read = 1000;

        let mut stats2 = WorkerStats::new();
        stats2.completed = 5;
        stats2.errors = 2;
        stats2.bytes_read = 500;

        stats1.merge(&stats2);

        assert_eq!(stats1.completed, 15);
        assert_eq!(stats1.errors, 3);
        assert_eq!(stats1.bytes_read, 1500);
    }

    #[test]
    fn test_worker_stats_start_stop() {
        let mut stats = WorkerStats::new();
        assert!(stats.elapsed().is_none());

        stats.start();
        assert!(stats.started_at.is_some());
        assert!(stats.elapsed().is_some());

        std::thread::sleep(std::time::Duration::from_millis(10));
        stats.stop();

        let elapsed = stats.elapsed().unwrap();
        assert!(elapsed >= std::time::Duration::from_millis(10));
    }
}
