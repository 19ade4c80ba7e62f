//! Pipeline metrics for observability
//!
//! Counters for monitoring pipeline health: how many records were
//! delivered, dropped, and how often an appender's worker restarted.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for the whole pipeline: the main queue and every appender
/// share one instance via `Arc`.
///
/// # Example
///
/// ```
/// use async_log_pipeline::PipelineMetrics;
///
/// let metrics = PipelineMetrics::new();
///
/// metrics.record_dropped();
/// metrics.record_delivered();
///
/// assert_eq!(metrics.dropped_count(), 1);
/// assert_eq!(metrics.delivered_count(), 1);
/// ```
#[derive(Debug)]
pub struct PipelineMetrics {
    /// Records dropped by the main queue or an appender queue on overflow.
    dropped_count: AtomicU64,

    /// Records successfully written by an appender.
    delivered_count: AtomicU64,

    /// Times any queue (main or per-appender) was observed full.
    queue_full_events: AtomicU64,

    /// Times an `AppenderWorker` entered `WaitAfterFail`.
    appender_failures: AtomicU64,

    /// Times an `AppenderWorker` successfully restarted after a failure.
    appender_restarts: AtomicU64,
}

impl PipelineMetrics {
    pub const fn new() -> Self {
        Self {
            dropped_count: AtomicU64::new(0),
            delivered_count: AtomicU64::new(0),
            queue_full_events: AtomicU64::new(0),
            appender_failures: AtomicU64::new(0),
            appender_restarts: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn queue_full_events(&self) -> u64 {
        self.queue_full_events.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn appender_failures(&self) -> u64 {
        self.appender_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn appender_restarts(&self) -> u64 {
        self.appender_restarts.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_queue_full(&self) -> u64 {
        self.queue_full_events.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_appender_failure(&self) -> u64 {
        self.appender_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_appender_restart(&self) -> u64 {
        self.appender_restarts.fetch_add(1, Ordering::Relaxed)
    }

    /// Fraction of offered records that were dropped, in `[0.0, 100.0]`.
    /// Returns `0.0` if nothing has been offered yet.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.delivered_count() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.dropped_count.store(0, Ordering::Relaxed);
        self.delivered_count.store(0, Ordering::Relaxed);
        self.queue_full_events.store(0, Ordering::Relaxed);
        self.appender_failures.store(0, Ordering::Relaxed);
        self.appender_restarts.store(0, Ordering::Relaxed);
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PipelineMetrics {
    /// Snapshot of the current counter values, independent of the source.
    fn clone(&self) -> Self {
        Self {
            dropped_count: AtomicU64::new(self.dropped_count()),
            delivered_count: AtomicU64::new(self.delivered_count()),
            queue_full_events: AtomicU64::new(self.queue_full_events()),
            appender_failures: AtomicU64::new(self.appender_failures()),
            appender_restarts: AtomicU64::new(self.appender_restarts()),
        }
    }
}
