//! Pairs one appender with its private queue and worker thread.

use super::appender::Appender;
use super::appender_worker::AppenderWorker;
use super::bounded_queue::{BoundedQueue, EnqueueOutcome};
use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::metrics::PipelineMetrics;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_APPENDER_QUEUE_SIZE: usize = 50_000;
const APPENDER_QUEUE_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Owns one appender's queue and worker thread. The dispatcher holds one
/// `AppenderAdapter` per registered appender and mediates every enqueue
/// through `AppenderAdapter::enqueue`.
pub struct AppenderAdapter {
    name: String,
    level: LogLevel,
    queue: Arc<BoundedQueue<LogRecord>>,
    terminated: Arc<AtomicBool>,
    worker: AppenderWorker,
    consecutive_fail_count: AtomicU32,
}

impl AppenderAdapter {
    pub fn new(
        appender: Box<dyn Appender>,
        level: LogLevel,
        metrics: Arc<PipelineMetrics>,
    ) -> Self {
        Self::with_queue_capacity(appender, level, metrics, DEFAULT_APPENDER_QUEUE_SIZE)
    }

    pub fn with_queue_capacity(
        appender: Box<dyn Appender>,
        level: LogLevel,
        metrics: Arc<PipelineMetrics>,
        queue_capacity: usize,
    ) -> Self {
        let name = appender.name().to_string();
        let queue = BoundedQueue::new(queue_capacity, APPENDER_QUEUE_POLL_INTERVAL);
        let terminated = Arc::new(AtomicBool::new(false));
        let worker = AppenderWorker::spawn(appender, queue.clone(), terminated.clone(), metrics);

        Self {
            name,
            level,
            queue,
            terminated,
            worker,
            consecutive_fail_count: AtomicU32::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Clones `record` and offers it to this adapter's queue. The original
    /// stays owned by the dispatcher regardless of the outcome.
    pub fn enqueue(&self, record: &LogRecord) -> EnqueueOutcome {
        let outcome = self.queue.enqueue(record.clone());
        match outcome {
            EnqueueOutcome::Accepted => {
                self.consecutive_fail_count.store(0, Ordering::Relaxed);
            }
            EnqueueOutcome::Rejected => {
                self.consecutive_fail_count.fetch_add(1, Ordering::Relaxed);
            }
        }
        outcome
    }

    /// Drops one record from the head of this adapter's queue, if any.
    /// Used to implement `OverflowAction::DiscardOlder`.
    pub fn discard_oldest(&self) {
        let _ = self.queue.dequeue(Duration::from_millis(0));
    }

    pub fn consecutive_fail_count(&self) -> u32 {
        self.consecutive_fail_count.load(Ordering::Relaxed)
    }

    pub fn queue_len(&self) -> usize {
        self.queue.size()
    }

    /// Signals the worker to stop after draining, and joins it. Shutting
    /// down the queue first guarantees the worker cannot block forever on
    /// an empty `dequeue` once it observes termination.
    fn shutdown(&mut self) {
        self.terminated.store(true, Ordering::Release);
        self.queue.shutdown();
        self.worker.join();
    }
}

impl Drop for AppenderAdapter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
