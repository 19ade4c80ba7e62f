//! # async_log_pipeline
//!
//! An asynchronous, multi-sink logging pipeline: producer threads hand
//! records to a central dispatcher, which fans them out to a configurable
//! set of appenders, each running on its own worker thread with its own
//! bounded queue and failure/restart lifecycle.
//!
//! ## Features
//!
//! - **Never blocks producers longer than the queue's poll interval**
//! - **Per-appender isolation**: one sink failing or restarting does not
//!   affect the others
//! - **Policy-driven overflow handling** via a user-supplied events handler
//! - **Thread safe**, designed for many concurrent producers

pub mod appenders;
pub mod core;
pub mod macros;
pub mod render;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::FileAppender;
    pub use crate::appenders::InMemoryAppender;
    pub use crate::core::{
        build_log_writer, Appender, AppenderHandle, EventsHandler, LogLevel, LogWriter,
        LogWriterBuilder, LoggerError, OverflowAction, OverflowReason, PipelineMetrics, Result,
    };
    pub use crate::render::{OutputFormat, TimestampFormat};
}

#[cfg(feature = "console")]
pub use appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use appenders::FileAppender;
pub use appenders::InMemoryAppender;
pub use core::{
    build_log_writer, Appender, AppenderHandle, EventsHandler, LogLevel, LogWriter,
    LogWriterBuilder, LoggerError, OverflowAction, OverflowReason, PipelineMetrics, Result,
};
pub use render::{OutputFormat, TimestampFormat};
