//! Error types for the logging pipeline

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Producer-visible: the main queue rejected a record because it was full.
    #[error("main queue full: could not enqueue record for dispatch")]
    MainQueueFull,

    /// Setup/parse-time: mismatched configuration or an invalid level string.
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// IO error with context, surfaced by appenders (not by the core pipeline).
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error, surfaced by appenders.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error, surfaced by appenders that render as JSON.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An appender's `setup`, `write`, or `teardown` failed.
    #[error("appender '{name}' failed during {phase}: {message}")]
    AppenderFailure {
        name: String,
        phase: &'static str,
        message: String,
    },

    /// Generic error (escape hatch for appender implementations).
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn appender_failure(
        name: impl Into<String>,
        phase: &'static str,
        message: impl Into<String>,
    ) -> Self {
        LoggerError::AppenderFailure {
            name: name.into(),
            phase,
            message: message.into(),
        }
    }

    pub fn other(msg: impl Into<String>) -> Self {
        LoggerError::Other(msg.into())
    }
}
