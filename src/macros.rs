//! Logging macros for ergonomic log message formatting.
//!
//! Thin `format!`-style sugar around `LogWriter::log`. Not part of the
//! core pipeline (see `src/core`), just convenience for call sites.
//!
//! # Examples
//!
//! ```
//! use async_log_pipeline::info;
//! use async_log_pipeline::core::{build_log_writer, LogLevel};
//! use async_log_pipeline::appenders::InMemoryAppender;
//!
//! let writer = build_log_writer(
//!     vec![(Box::new(InMemoryAppender::new()), LogLevel::Debug)],
//!     None,
//! ).unwrap();
//!
//! info!(writer, "startup", "server listening on port {}", 8080).unwrap();
//! ```

/// Log a message at an explicit level, with `format!`-style arguments.
#[macro_export]
macro_rules! log {
    ($writer:expr, $level:expr, $tag:expr, $($arg:tt)+) => {
        $writer.log($level, format!($($arg)+), $tag)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($writer:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::core::LogLevel::Debug, $tag, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($writer:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::core::LogLevel::Info, $tag, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($writer:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::core::LogLevel::Warning, $tag, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($writer:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::core::LogLevel::Error, $tag, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($writer:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::core::LogLevel::Fatal, $tag, $($arg)+)
    };
}
