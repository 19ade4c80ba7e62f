//! Console appender: writes rendered records to stdout/stderr.

use crate::core::{Appender, LogLevel, LogRecord, Result};
use crate::render::{OutputFormat, TimestampFormat};

pub struct ConsoleAppender {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    /// Set the output format for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use async_log_pipeline::appenders::ConsoleAppender;
    /// use async_log_pipeline::render::OutputFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```
    /// use async_log_pipeline::appenders::ConsoleAppender;
    /// use async_log_pipeline::render::TimestampFormat;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_timestamp_format(TimestampFormat::Iso8601Micros);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    fn format_text(&self, record: &LogRecord) -> String {
        let level_str = format!("{:5}", record.level_as_string());
        #[cfg(feature = "console")]
        let level_str = if self.use_colors {
            use colored::Colorize;
            level_str.color(record.level.color_code()).to_string()
        } else {
            level_str
        };

        let timestamp_str = self.timestamp_format.format(&record.timestamp);

        format!(
            "[{}] [{}] {} - {}",
            timestamp_str, level_str, record.tag, record.message
        )
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn name(&self) -> &str {
        "console"
    }

    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let output = match self.output_format {
            OutputFormat::Text => self.format_text(record),
            OutputFormat::Json | OutputFormat::Logfmt => {
                self.output_format.format(record, &self.timestamp_format)
            }
        };

        match record.level {
            LogLevel::Error | LogLevel::Fatal => eprintln!("{output}"),
            _ => println!("{output}"),
        }
        Ok(())
    }

    fn teardown(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }
}
