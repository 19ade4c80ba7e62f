//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

// Thread-local cache for the producing thread's id string, to avoid
// re-formatting `ThreadId` on every single record.
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            *cache = Some(format!("{:?}", std::thread::current().id()));
        }
        cache
            .as_ref()
            .expect("thread id cache initialized above")
            .clone()
    })
}

/// One log event: level, message, tag, timestamp, and the id of the thread
/// that produced it. Immutable after construction and cheap to clone, since
/// the dispatcher hands each accepting appender its own copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub tag: String,
    pub timestamp: DateTime<Utc>,
    pub thread_id: String,
}

impl LogRecord {
    /// Build a record, capturing `now()` and the current thread id.
    pub fn new(level: LogLevel, message: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            tag: tag.into(),
            timestamp: Utc::now(),
            thread_id: current_thread_id(),
        }
    }

    pub fn level_as_string(&self) -> &'static str {
        self.level.as_str()
    }
}
