//! Basic metrics instrumentation for tracking performance.
//!
//! Provides counters for contact submissions and their dispatches, plus
//! request/duration tracking for the email provider's HTTP API.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector shared by the pipeline and the provider client.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Total number of HTTP requests made to the provider
    http_requests_total: Arc<AtomicU64>,

    /// Total number of provider HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all provider requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Contact submissions received
    submissions_total: Arc<AtomicU64>,

    /// Submissions rejected by validation
    validation_failures_total: Arc<AtomicU64>,

    /// Individual email dispatches attempted
    dispatch_attempts_total: Arc<AtomicU64>,

    /// Individual email dispatches that failed
    dispatch_failures_total: Arc<AtomicU64>,

    /// Submissions where exactly one of the two emails was sent
    partial_successes_total: Arc<AtomicU64>,

    /// Submissions where neither email was sent
    full_failures_total: Arc<AtomicU64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a provider HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission(&self) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one dispatch attempt and whether it succeeded.
    pub fn record_dispatch(&self, sent: bool) {
        self.dispatch_attempts_total.fetch_add(1, Ordering::Relaxed);
        if !sent {
            self.dispatch_failures_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_partial_success(&self) {
        self.partial_successes_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_full_failure(&self) {
        self.full_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average provider request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    pub fn dispatch_attempts_total(&self) -> u64 {
        self.dispatch_attempts_total.load(Ordering::Relaxed)
    }

    pub fn dispatch_failures_total(&self) -> u64 {
        self.dispatch_failures_total.load(Ordering::Relaxed)
    }

    pub fn partial_successes_total(&self) -> u64 {
        self.partial_successes_total.load(Ordering::Relaxed)
    }

    pub fn full_failures_total(&self) -> u64 {
        self.full_failures_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            submissions_total: self.submissions_total(),
            validation_failures_total: self.validation_failures_total(),
            dispatch_attempts_total: self.dispatch_attempts_total(),
            dispatch_failures_total: self.dispatch_failures_total(),
            partial_successes_total: self.partial_successes_total(),
            full_failures_total: self.full_failures_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
    pub submissions_total: u64,
    pub validation_failures_total: u64,
    pub dispatch_attempts_total: u64,
    pub dispatch_failures_total: u64,
    pub partial_successes_total: u64,
    pub full_failures_total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_record_http_request() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(100));
        metrics.record_http_request(Duration::from_millis(200));
        assert_eq!(metrics.http_requests_total(), 2);
        assert_eq!(metrics.http_duration_total_ms(), 300);
        assert_eq!(metrics.http_duration_avg_ms(), 150.0);
    }

    #[test]
    fn test_dispatch_counters() {
        let metrics = Metrics::new();
        metrics.record_dispatch(true);
        metrics.record_dispatch(false);
        assert_eq!(metrics.dispatch_attempts_total(), 2);
        assert_eq!(metrics.dispatch_failures_total(), 1);
    }

    #[test]
    fn test_summary() {
        let metrics = Metrics::new();
        metrics.record_submission();
        metrics.record_validation_failure();
        metrics.record_partial_success();

        let summary = metrics.summary();
        assert_eq!(summary.submissions_total, 1);
        assert_eq!(summary.validation_failures_total, 1);
        assert_eq!(summary.partial_successes_total, 1);
        assert_eq!(summary.full_failures_total, 0);
        assert_eq!(summary.http_duration_avg_ms, 0.0);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = Metrics::new();
        let metrics1 = metrics.clone();
        let metrics2 = metrics.clone();

        let handle1 = thread::spawn(move || {
            for _ in 0..100 {
                metrics1.record_submission();
            }
        });
        let handle2 = thread::spawn(move || {
            for _ in 0..100 {
                metrics2.record_submission();
            }
        });

        handle1.join().unwrap();
        handle2.join().unwrap();

        assert_eq!(metrics.submissions_total(), 200);
    }
}
