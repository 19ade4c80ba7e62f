//! In-memory appender: captures records into a shared `Vec`. Useful for
//! tests and for embedding a pipeline inside another in-process consumer.

use crate::core::{Appender, LogRecord, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct InMemoryAppender {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl InMemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far, in delivery order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Appender for InMemoryAppender {
    fn name(&self) -> &str {
        "memory"
    }

    fn write(&mut self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }
}
