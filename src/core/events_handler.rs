//! Overflow handling for per-appender queues
//!
//! When an appender's queue is full, the dispatcher does not decide the
//! outcome itself — it asks the configured `EventsHandler`, synchronously,
//! on the dispatcher thread. The handler inspects the failed record and
//! picks an `OverflowAction`; the dispatcher carries that action out.

use super::log_record::LogRecord;

/// What the dispatcher should do after an appender's queue rejected a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowAction {
    /// Drop the record that just failed to enqueue (default).
    SkipNewest,
    /// Drop the oldest record currently queued for this appender. The new
    /// record that triggered the overflow is still dropped, not retried —
    /// this action only makes room for records after it.
    DiscardOlder,
}

impl Default for OverflowAction {
    fn default() -> Self {
        OverflowAction::SkipNewest
    }
}

/// Why the handler is being asked to make a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowReason {
    /// The named appender's queue was full when the dispatcher tried to
    /// enqueue `failed_record`.
    AdapterQueueFull,
}

/// User-supplied callback invoked synchronously on the dispatcher thread
/// whenever an appender's queue cannot accept a record.
///
/// Implementations must not call back into `LogWriter::log` from within
/// `on_appender_error` — the pipeline detects and no-ops such re-entrancy
/// rather than deadlocking, but the resulting record is lost.
pub trait EventsHandler: Send + Sync {
    /// `action` starts out set to the handler's previous decision (or
    /// `OverflowAction::default()` on the first call for this appender);
    /// mutate it to change the outcome. Leaving it unchanged repeats the
    /// current policy.
    fn on_appender_error(
        &self,
        appender_name: &str,
        failed_record: &LogRecord,
        reason: OverflowReason,
        action: &mut OverflowAction,
    );
}

/// Default handler: always `SkipNewest`, no side effects.
pub struct SilentEventsHandler;

impl EventsHandler for SilentEventsHandler {
    fn on_appender_error(
        &self,
        _appender_name: &str,
        _failed_record: &LogRecord,
        _reason: OverflowReason,
        _action: &mut OverflowAction,
    ) {
    }
}
