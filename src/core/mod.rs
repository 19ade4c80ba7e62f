//! Core pipeline types and traits

pub mod appender;
pub mod appender_adapter;
pub mod appender_worker;
pub mod bounded_queue;
pub mod dispatcher;
pub mod error;
pub mod events_handler;
pub mod layout;
pub mod log_level;
pub mod log_record;
pub mod log_writer;
pub mod metrics;

pub use appender::Appender;
pub use appender_adapter::{AppenderAdapter, DEFAULT_APPENDER_QUEUE_SIZE};
pub use bounded_queue::{BoundedQueue, DequeueOutcome, EnqueueOutcome};
pub use dispatcher::{AppenderHandle, Dispatcher, DEFAULT_MAIN_QUEUE_SIZE};
pub use error::{LoggerError, Result};
pub use events_handler::{EventsHandler, OverflowAction, OverflowReason, SilentEventsHandler};
pub use layout::transform_layout;
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use log_writer::{build_log_writer, LogWriter, LogWriterBuilder};
pub use metrics::PipelineMetrics;
