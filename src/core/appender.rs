//! Appender capability: the contract a log sink must implement
//!
//! Implementations are thread-affine — the pipeline guarantees each appender
//! is only ever touched from its own dedicated `AppenderWorker` thread, so
//! an appender needs no internal locking. `level` and restart-cooldown
//! pacing are deliberately *not* part of this trait; they are dispatch-side
//! bookkeeping owned by `AppenderAdapter`/`AppenderWorker`.

use super::error::Result;
use super::log_record::LogRecord;

pub trait Appender: Send {
    /// Stable identifier reported to the events handler and used in
    /// internal diagnostics. Does not need to be unique across appenders.
    fn name(&self) -> &str;

    /// Called once before the worker enters its `Running` state. The
    /// default no-op is appropriate for sinks with nothing to initialize.
    fn setup(&mut self) -> Result<()> {
        Ok(())
    }

    /// Write one record. Errors move the worker into `WaitAfterFail`.
    fn write(&mut self, record: &LogRecord) -> Result<()>;

    /// Called exactly once, on every exit path, before the worker thread
    /// ends (including the teardown-on-panic path).
    fn teardown(&mut self) -> Result<()> {
        Ok(())
    }

    /// Attempted once per cooldown window after a `write` failure. `true`
    /// resumes `Running`; `false` restarts the cooldown. The default
    /// always succeeds, appropriate for sinks with no external resource to
    /// re-acquire.
    fn try_restart(&mut self) -> bool {
        true
    }
}
