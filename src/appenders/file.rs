//! File appender: appends rendered records to a file.
//!
//! The file is opened in `setup()`, not at construction, so the worker's
//! retry loop (not the caller of `new`) is what pays for a missing
//! directory or a permissions problem.

use crate::core::{Appender, LogRecord, LoggerError, Result};
use crate::render::TimestampFormat;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    timestamp_format: TimestampFormat,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: None,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```
    /// use async_log_pipeline::appenders::FileAppender;
    /// use async_log_pipeline::render::TimestampFormat;
    ///
    /// let appender = FileAppender::new("/tmp/app.log")
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }
}

impl Appender for FileAppender {
    fn name(&self) -> &str {
        "file"
    }

    fn setup(&mut self) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| {
                LoggerError::io_operation(format!("opening {}", self.path.display()), err.to_string(), err)
            })?;
        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::other("file writer not initialized"))?;

        let timestamp_str = self.timestamp_format.format(&record.timestamp);
        let line = format!(
            "[{}] [{:5}] [{}] {}\n",
            timestamp_str,
            record.level_as_string(),
            record.tag,
            record.message
        );

        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn teardown(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        self.writer = None;
        Ok(())
    }

    /// Re-attempts `setup()`, e.g. if the target directory reappears after
    /// being removed out from under a running writer.
    fn try_restart(&mut self) -> bool {
        self.setup().is_ok()
    }
}
