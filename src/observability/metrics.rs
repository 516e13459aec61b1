//! Intake counters.
//!
//! Cheap process-local counters for monitoring how submissions and imports
//! are going. They are reported by the health endpoint.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared counters for the intake paths. Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct IntakeMetrics {
    submissions_accepted: Arc<AtomicU64>,
    submissions_rejected: Arc<AtomicU64>,
    submissions_failed: Arc<AtomicU64>,
    imports_completed: Arc<AtomicU64>,
    imports_failed: Arc<AtomicU64>,
    rows_inserted: Arc<AtomicU64>,
    rows_invalid: Arc<AtomicU64>,
}

/// Point-in-time copy of [`IntakeMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub submissions_accepted: u64,
    pub submissions_rejected: u64,
    pub submissions_failed: u64,
    pub imports_completed: u64,
    pub imports_failed: u64,
    pub rows_inserted: u64,
    pub rows_invalid: u64,
}

impl IntakeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A submission was stored.
    pub fn track_submission_accepted(&self) {
        self.submissions_accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// A submission failed validation.
    pub fn track_submission_rejected(&self, invalid_fields: usize) {
        self.submissions_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(invalid_fields, "Submission rejected");
    }

    /// A valid submission could not be stored.
    pub fn track_submission_failed(&self) {
        self.submissions_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// An import ran to the end.
    pub fn track_import_completed(&self, inserted: u64, invalid: usize) {
        self.imports_completed.fetch_add(1, Ordering::Relaxed);
        self.rows_inserted.fetch_add(inserted, Ordering::Relaxed);
        self.rows_invalid.fetch_add(invalid as u64, Ordering::Relaxed);
    }

    /// An import was aborted.
    pub fn track_import_failed(&self) {
        self.imports_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            submissions_accepted: self.submissions_accepted.load(Ordering::Relaxed),
            submissions_rejected: self.submissions_rejected.load(Ordering::Relaxed),
            submissions_failed: self.submissions_failed.load(Ordering::Relaxed),
            imports_completed: self.imports_completed.load(Ordering::Relaxed),
            imports_failed: self.imports_failed.load(Ordering::Relaxed),
            rows_inserted: self.rows_inserted.load(Ordering::Relaxed),
            rows_invalid: self.rows_invalid.load(Ordering::Relaxed),
        }
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer with a specific status and return the elapsed milliseconds.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        if success {
            tracing::debug!(
                operation = self.operation,
                duration_ms = duration_ms,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_start_at_zero() {
        let snapshot = IntakeMetrics::new().snapshot();
        assert_eq!(snapshot.submissions_accepted, 0);
        assert_eq!(snapshot.imports_completed, 0);
        assert_eq!(snapshot.rows_inserted, 0);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = IntakeMetrics::new();
        let handle = metrics.clone();

        handle.track_submission_accepted();
        handle.track_submission_rejected(2);
        handle.track_import_completed(5, 2);
        handle.track_import_completed(1, 0);
        metrics.track_import_failed();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.submissions_accepted, 1);
        assert_eq!(snapshot.submissions_rejected, 1);
        assert_eq!(snapshot.imports_completed, 2);
        assert_eq!(snapshot.imports_failed, 1);
        assert_eq!(snapshot.rows_inserted, 6);
        assert_eq!(snapshot.rows_invalid, 2);
    }

    #[test]
    fn test_timer() {
        let timer = Timer::new("test_operation");
        std::thread::sleep(std::time::Duration::from_millis(10));
        let duration = timer.finish_with_status(true);
        assert!(duration >= 10);
    }
}
