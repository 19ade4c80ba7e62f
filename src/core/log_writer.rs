//! Producer-facing façade: creates records, enforces the global enabled
//! flag and minimum level, and owns the dispatcher for its whole lifetime.

use super::appender::Appender;
use super::appender_adapter::AppenderAdapter;
use super::dispatcher::{AppenderHandle, Dispatcher};
use super::error::{LoggerError, Result};
use super::events_handler::EventsHandler;
use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::metrics::PipelineMetrics;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

pub struct LogWriter {
    enabled: AtomicBool,
    min_level: LogLevel,
    dispatcher: Arc<Dispatcher>,
    dispatcher_thread: Option<JoinHandle<()>>,
    metrics: Arc<PipelineMetrics>,
}

impl LogWriter {
    /// Enqueues a record onto the main queue if the writer is enabled and
    /// `level >= min_level`. A disabled writer or a below-threshold level
    /// is a silent no-op, not an error.
    pub fn log(&self, level: LogLevel, message: impl Into<String>, tag: impl Into<String>) -> Result<()> {
        if !self.enabled.load(Ordering::Acquire) || level < self.min_level {
            return Ok(());
        }

        let record = LogRecord::new(level, message, tag);
        match self.dispatcher.main_queue().enqueue(record) {
            super::bounded_queue::EnqueueOutcome::Accepted => {
                self.metrics.record_delivered();
                Ok(())
            }
            super::bounded_queue::EnqueueOutcome::Rejected => {
                self.metrics.record_dropped();
                self.metrics.record_queue_full();
                Err(LoggerError::MainQueueFull)
            }
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Release);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn metrics(&self) -> &PipelineMetrics {
        &self.metrics
    }

    /// Wraps `appender` in a fresh adapter/worker pair and registers it for
    /// dispatch. Returns a handle usable with `del_appender`.
    pub fn add_appender(&self, appender: Box<dyn Appender>, level: LogLevel) -> AppenderHandle {
        let adapter = AppenderAdapter::new(appender, level, self.metrics.clone());
        self.dispatcher.add_appender(adapter)
    }

    /// Deregisters the appender from future dispatch. Its adapter and
    /// worker keep draining whatever is already queued until this writer
    /// is dropped (see the dispatcher's design notes).
    pub fn del_appender(&self, handle: AppenderHandle) {
        self.dispatcher.del_appender(handle);
    }

    pub fn appenders_count(&self) -> usize {
        self.dispatcher.appenders_count()
    }

    pub fn appender_names(&self) -> Vec<String> {
        self.dispatcher.appender_names()
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        self.dispatcher.terminate();
        self.dispatcher.main_queue().shutdown();
        if let Some(thread) = self.dispatcher_thread.take() {
            let _ = thread.join();
        }
    }
}

/// Builds a `LogWriter` from a fixed set of appenders and an optional
/// events handler. `min_level` is computed as the minimum across all
/// appender levels, so records no appender could possibly accept are
/// rejected at the producer instead of paying for a round trip through
/// the dispatcher.
pub fn build_log_writer(
    appenders: Vec<(Box<dyn Appender>, LogLevel)>,
    events_handler: Option<Arc<dyn EventsHandler>>,
) -> Result<LogWriter> {
    let min_level = appenders
        .iter()
        .map(|(_, level)| *level)
        .min()
        .unwrap_or(LogLevel::Fatal);

    let metrics = Arc::new(PipelineMetrics::new());
    let dispatcher = Dispatcher::new(events_handler);
    let dispatcher_thread = dispatcher.start();

    for (appender, level) in appenders {
        let adapter = AppenderAdapter::new(appender, level, metrics.clone());
        dispatcher.add_appender(adapter);
    }

    Ok(LogWriter {
        enabled: AtomicBool::new(true),
        min_level,
        dispatcher,
        dispatcher_thread: Some(dispatcher_thread),
        metrics,
    })
}

/// Fluent alternative to `build_log_writer`.
#[derive(Default)]
pub struct LogWriterBuilder {
    appenders: Vec<(Box<dyn Appender>, LogLevel)>,
    events_handler: Option<Arc<dyn EventsHandler>>,
    min_level_override: Option<LogLevel>,
}

impl LogWriterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn appender(mut self, appender: Box<dyn Appender>, level: LogLevel) -> Self {
        self.appenders.push((appender, level));
        self
    }

    #[must_use]
    pub fn events_handler(mut self, handler: Arc<dyn EventsHandler>) -> Self {
        self.events_handler = Some(handler);
        self
    }

    /// Overrides the computed minimum level. Fails at `build()` time if the
    /// override is stricter (higher) than the loosest appender level, since
    /// that would silently make some configured appender unreachable.
    #[must_use]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level_override = Some(level);
        self
    }

    pub fn build(self) -> Result<LogWriter> {
        if let Some(override_level) = self.min_level_override {
            if let Some(loosest) = self.appenders.iter().map(|(_, l)| *l).min() {
                if override_level > loosest {
                    return Err(LoggerError::config(
                        "LogWriterBuilder",
                        format!(
                            "min_level override {override_level} is stricter than the loosest configured appender level {loosest}"
                        ),
                    ));
                }
            }
        }

        let mut writer = build_log_writer(self.appenders, self.events_handler)?;
        if let Some(override_level) = self.min_level_override {
            writer.min_level = override_level;
        }
        Ok(writer)
    }
}
