//! A bounded, shutdown-aware FIFO queue used for both the main queue and
//! every per-appender queue.
//!
//! Built on a `crossbeam_channel::bounded` channel rather than a hand-rolled
//! mutex/condvar ring buffer, since that is how this codebase already talks
//! to worker threads. A queue is shared between its single enqueuing side
//! and its single dequeuing side through an `Arc`, so neither side owns the
//! channel outright and `shutdown()` can be called from either.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, SendTimeoutError, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Outcome of `BoundedQueue::enqueue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
    Accepted,
    Rejected,
}

/// Outcome of `BoundedQueue::dequeue`.
#[derive(Debug)]
pub enum DequeueOutcome<T> {
    Signaled(T),
    Timeout,
    Shutdown,
}

pub struct BoundedQueue<T> {
    sender: Sender<T>,
    receiver: Receiver<T>,
    shutdown: AtomicBool,
    poll_interval: Duration,
}

impl<T> BoundedQueue<T> {
    /// `capacity` bounds how many items may sit in the queue at once.
    /// `poll_interval` is both the producer's max wait on a full queue and
    /// the consumer's idle wake-up period.
    pub fn new(capacity: usize, poll_interval: Duration) -> Arc<Self> {
        let (sender, receiver) = bounded(capacity);
        Arc::new(Self {
            sender,
            receiver,
            shutdown: AtomicBool::new(false),
            poll_interval,
        })
    }

    /// Never blocks longer than `poll_interval`. Returns `Rejected` if the
    /// queue is full after that wait, or if `shutdown()` has been called.
    pub fn enqueue(&self, item: T) -> EnqueueOutcome {
        if self.shutdown.load(Ordering::Acquire) {
            return EnqueueOutcome::Rejected;
        }
        match self.sender.send_timeout(item, self.poll_interval) {
            Ok(()) => EnqueueOutcome::Accepted,
            Err(SendTimeoutError::Timeout(_)) => EnqueueOutcome::Rejected,
            Err(SendTimeoutError::Disconnected(_)) => EnqueueOutcome::Rejected,
        }
    }

    /// Waits up to `timeout` for an item. An item is always delivered if one
    /// is available, even after `shutdown()`, so a healthy consumer can
    /// drain whatever was queued before it observes `Shutdown`.
    pub fn dequeue(&self, timeout: Duration) -> DequeueOutcome<T> {
        match self.receiver.recv_timeout(timeout) {
            Ok(item) => DequeueOutcome::Signaled(item),
            Err(RecvTimeoutError::Timeout) => {
                if self.shutdown.load(Ordering::Acquire) && self.receiver.is_empty() {
                    DequeueOutcome::Shutdown
                } else {
                    DequeueOutcome::Timeout
                }
            }
            Err(RecvTimeoutError::Disconnected) => DequeueOutcome::Shutdown,
        }
    }

    /// Idempotent. Wakes any future `dequeue` call once the queue drains.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }

    pub fn size(&self) -> usize {
        self.sender.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_dequeue_round_trip() {
        let queue = BoundedQueue::new(4, Duration::from_millis(50));
        assert_eq!(queue.enqueue(42), EnqueueOutcome::Accepted);
        match queue.dequeue(Duration::from_millis(50)) {
            DequeueOutcome::Signaled(item) => assert_eq!(item, 42),
            other => panic!("expected Signaled, got {other:?}"),
        }
    }

    #[test]
    fn test_enqueue_rejected_when_full() {
        let queue = BoundedQueue::new(1, Duration::from_millis(20));
        assert_eq!(queue.enqueue(1), EnqueueOutcome::Accepted);
        assert_eq!(queue.enqueue(2), EnqueueOutcome::Rejected);
    }

    #[test]
    fn test_dequeue_timeout_on_empty_queue() {
        let queue: Arc<BoundedQueue<i32>> = BoundedQueue::new(4, Duration::from_millis(20));
        match queue.dequeue(Duration::from_millis(20)) {
            DequeueOutcome::Timeout => {}
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_shutdown_rejects_enqueue() {
        let queue = BoundedQueue::new(4, Duration::from_millis(20));
        queue.shutdown();
        assert_eq!(queue.enqueue(1), EnqueueOutcome::Rejected);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let queue: Arc<BoundedQueue<i32>> = BoundedQueue::new(4, Duration::from_millis(20));
        queue.shutdown();
        queue.shutdown();
        assert!(queue.is_shutdown());
    }

    #[test]
    fn test_dequeue_drains_before_reporting_shutdown() {
        let queue = BoundedQueue::new(4, Duration::from_millis(20));
        queue.enqueue(1);
        queue.enqueue(2);
        queue.shutdown();

        match queue.dequeue(Duration::from_millis(20)) {
            DequeueOutcome::Signaled(item) => assert_eq!(item, 1),
            other => panic!("expected Signaled(1), got {other:?}"),
        }
        match queue.dequeue(Duration::from_millis(20)) {
            DequeueOutcome::Signaled(item) => assert_eq!(item, 2),
            other => panic!("expected Signaled(2), got {other:?}"),
        }
        match queue.dequeue(Duration::from_millis(20)) {
            DequeueOutcome::Shutdown => {}
            other => panic!("expected Shutdown once drained, got {other:?}"),
        }
    }

    #[test]
    fn test_size_reports_current_length() {
        let queue = BoundedQueue::new(4, Duration::from_millis(20));
        assert_eq!(queue.size(), 0);
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.size(), 2);
    }
}
