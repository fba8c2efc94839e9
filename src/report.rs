//! Report aggregation
//!
//! Aggregation is a pure fold over the collected outcomes, performed once on
//! a single thread after the concurrent phase has ended. Workers never touch
//! shared tallies.

use crate::outcome::Outcome;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary statistics for a completed run
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoadReport {
    /// Total requests executed (successes + failures)
    pub total_requests: usize,

    /// Requests with a transported response and status below 400
    pub success_count: usize,

    /// Requests with a transport failure or status 400 and above
    pub fail_count: usize,

    /// Wall-clock duration of the whole run in seconds
    pub total_duration_secs: f64,

    /// Mean per-request latency in milliseconds
    pub avg_latency_ms: f64,

    /// Completed requests per second of wall-clock time
    pub requests_per_second: f64,

    /// Total response body bytes drained across all requests
    pub total_bytes: u64,

    /// Latency distribution across all requests (milliseconds)
    pub latency: LatencyPercentiles,
}

impl LoadReport {
    /// Fold a closed set of outcomes into a report
    ///
    /// `total_time` is the measured wall-clock time of the run, not the sum
    /// of per-request latencies. An empty run reports zeros; none of the
    /// rates divide by zero.
    pub fn from_outcomes(outcomes: &[Outcome], total_time: Duration) -> Self {
        let total_requests = outcomes.len();
        let success_count = outcomes.iter().filter(|o| o.is_success()).count();
        let fail_count = total_requests - success_count;
        let total_bytes: u64 = outcomes.iter().map(|o| o.bytes_read).sum();

        let durations_ms: Vec<f64> = outcomes
            .iter()
            .map(|o| o.duration.as_secs_f64() * 1000.0)
            .collect();

        let avg_latency_ms = if total_requests > 0 {
            durations_ms.iter().sum::<f64>() / total_requests as f64
        } else {
            0.0
        };

        let total_duration_secs = total_time.as_secs_f64();
        let requests_per_second = if total_duration_secs > 0.0 {
            total_requests as f64 / total_duration_secs
        } else {
            0.0
        };

        Self {
            total_requests,
            success_count,
            fail_count,
            total_duration_secs,
            avg_latency_ms,
            requests_per_second,
            total_bytes,
            latency: LatencyPercentiles::from_values(&durations_ms),
        }
    }

    /// Fraction of requests that succeeded (0.0 - 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.total_requests > 0 {
            self.success_count as f64 / self.total_requests as f64
        } else {
            0.0
        }
    }
}

/// Latency percentiles (all values in milliseconds)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct LatencyPercentiles {
    /// Minimum value
    pub min: f64,
    /// 50th percentile (median)
    pub p50: f64,
    /// 90th percentile
    pub p90: f64,
    /// 95th percentile
    pub p95: f64,
    /// 99th percentile
    pub p99: f64,
    /// Maximum value
    pub max: f64,
    /// Mean value
    pub mean: f64,
    /// Standard deviation
    pub stddev: f64,
}

impl LatencyPercentiles {
    /// Calculate percentiles from a slice of values
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let mut sorted: Vec<f64> = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let len = sorted.len();
        let mean = sorted.iter().sum::<f64>() / len as f64;

        let variance = if len > 1 {
            sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (len - 1) as f64
        } else {
            0.0
        };

        Self {
            min: sorted[0],
            p50: percentile(&sorted, 0.50),
            p90: percentile(&sorted, 0.90),
            p95: percentile(&sorted, 0.95),
            p99: percentile(&sorted, 0.99),
            max: sorted[len - 1],
            mean,
            stddev: variance.sqrt(),
        }
    }
}

/// Calculate percentile from sorted values using linear interpolation
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let idx = p * (sorted.len() - 1) as f64;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;
    let frac = idx - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RequestFailure;
    use crate::queue::WorkToken;

    fn response(index: usize, status: u16, millis: u64, bytes: u64) -> Outcome {
        Outcome::response(
            WorkToken(index),
            status,
            Duration::from_millis(millis),
            bytes,
        )
    }

    fn transport_failure(index: usize, millis: u64) -> Outcome {
        let failure = RequestFailure::Connect("connection refused".into());
        Outcome::failure(WorkToken(index), Duration::from_millis(millis), &failure)
    }

    #[test]
    fn test_report_from_outcomes() {
        let outcomes = vec![
            response(0, 200, 100, 1000),
            response(1, 200, 200, 1000),
            response(2, 404, 50, 500),
            transport_failure(3, 150),
        ];

        let report = LoadReport::from_outcomes(&outcomes, Duration::from_secs(2));

        assert_eq!(report.total_requests, 4);
        assert_eq!(report.success_count, 2);
        assert_eq!(report.fail_count, 2);
        assert_eq!(report.success_count + report.fail_count, report.total_requests);
        assert_eq!(report.total_bytes, 2500);
        assert!((report.avg_latency_ms - 125.0).abs() < 0.01);
        assert!((report.requests_per_second - 2.0).abs() < 0.01);
        assert!((report.success_rate() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_report_empty_run() {
        let report = LoadReport::from_outcomes(&[], Duration::from_millis(5));

        assert_eq!(report.total_requests, 0);
        assert_eq!(report.success_count, 0);
        assert_eq!(report.fail_count, 0);
        assert_eq!(report.avg_latency_ms, 0.0);
        assert_eq!(report.requests_per_second, 0.0);
        assert_eq!(report.success_rate(), 0.0);
        assert_eq!(report.latency.mean, 0.0);
    }

    #[test]
    fn test_report_all_failures() {
        let outcomes: Vec<Outcome> = (0..5).map(|i| transport_failure(i, 10)).collect();
        let report = LoadReport::from_outcomes(&outcomes, Duration::from_secs(1));

        assert_eq!(report.total_requests, 5);
        assert_eq!(report.success_count, 0);
        assert_eq!(report.fail_count, 5);
        assert_eq!(report.total_bytes, 0);
    }

    #[test]
    fn test_percentile_calculation() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let percentiles = LatencyPercentiles::from_values(&values);

        assert_eq!(percentiles.min, 1.0);
        assert_eq!(percentiles.max, 10.0);
        assert!((percentiles.p50 - 5.5).abs() < 0.01);
        assert!((percentiles.mean - 5.5).abs() < 0.01);
    }

    #[test]
    fn test_percentile_single_value() {
        let percentiles = LatencyPercentiles::from_values(&[42.0]);

        assert_eq!(percentiles.min, 42.0);
        assert_eq!(percentiles.max, 42.0);
        assert_eq!(percentiles.p50, 42.0);
        assert_eq!(percentiles.stddev, 0.0);
    }

    #[test]
    fn test_percentile_empty() {
        let percentiles = LatencyPercentiles::from_values(&[]);

        assert_eq!(percentiles.min, 0.0);
        assert_eq!(percentiles.max, 0.0);
        assert_eq!(percentiles.mean, 0.0);
    }

    #[test]
    fn test_report_serialization() {
        let outcomes = vec![response(0, 200, 100, 256)];
        let report = LoadReport::from_outcomes(&outcomes, Duration::from_secs(1));

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: LoadReport = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.total_requests, 1);
        assert_eq!(deserialized.success_count, 1);
        assert_eq!(deserialized.total_bytes, 256);
    }
}
