//! Output format configuration for log records
//!
//! Provides different output formats for log records:
//! - Text: Human-readable format (default)
//! - Json: Machine-readable JSON format
//! - Logfmt: Key-value format compatible with log aggregation tools

use super::timestamp::TimestampFormat;
use crate::core::log_record::LogRecord;

/// Output format for log records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `[2025-01-08T10:30:45Z] [INFO ] main - Request processed`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"2025-01-08T10:30:45Z","level":"INFO","message":"Request processed"}`
    Json,

    /// Logfmt format (key=value pairs)
    ///
    /// Example: `timestamp=2025-01-08T10:30:45Z level=INFO message="Request processed"`
    Logfmt,
}

impl OutputFormat {
    /// Format a log record according to this output format
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => self.format_text(record, timestamp_format),
            OutputFormat::Json => self.format_json(record, timestamp_format),
            OutputFormat::Logfmt => self.format_logfmt(record, timestamp_format),
        }
    }

    fn format_text(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let timestamp_str = timestamp_format.format(&record.timestamp);
        format!(
            "[{}] [{:5}] {} - {}",
            timestamp_str,
            record.level_as_string(),
            record.tag,
            record.message
        )
    }

    fn format_json(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "timestamp".to_string(),
            self.format_timestamp_json(record, timestamp_format),
        );
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level_as_string().to_string()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(record.message.clone()),
        );
        json_obj.insert(
            "tag".to_string(),
            serde_json::Value::String(record.tag.clone()),
        );
        json_obj.insert(
            "thread_id".to_string(),
            serde_json::Value::String(record.thread_id.clone()),
        );

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }

    fn format_timestamp_json(
        &self,
        record: &LogRecord,
        timestamp_format: &TimestampFormat,
    ) -> serde_json::Value {
        match timestamp_format {
            TimestampFormat::Unix => {
                serde_json::Value::Number(record.timestamp.timestamp().into())
            }
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(record.timestamp.timestamp_millis().into())
            }
            TimestampFormat::UnixMicros => {
                serde_json::Value::Number(record.timestamp.timestamp_micros().into())
            }
            _ => serde_json::Value::String(timestamp_format.format(&record.timestamp)),
        }
    }

    fn format_logfmt(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let parts = vec![
            format!(
                "timestamp={}",
                self.escape_logfmt_value(&timestamp_format.format(&record.timestamp))
            ),
            format!("level={}", record.level_as_string()),
            format!("message={}", self.quote_logfmt_value(&record.message)),
            format!("tag={}", self.escape_logfmt_value(&record.tag)),
            format!("thread_id={}", self.escape_logfmt_value(&record.thread_id)),
        ];

        parts.join(" ")
    }

    fn escape_logfmt_value(&self, value: &str) -> String {
        if value.contains(' ') || value.contains('"') || value.contains('=') {
            self.quote_logfmt_value(value)
        } else {
            value.to_string()
        }
    }

    fn quote_logfmt_value(&self, value: &str) -> String {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    fn record(level: LogLevel, message: &str) -> LogRecord {
        LogRecord::new(level, message, "main")
    }

    #[test]
    fn test_text_format() {
        let record = record(LogLevel::Info, "Test message");
        let format = OutputFormat::Text;
        let result = format.format(&record, &TimestampFormat::Iso8601);

        assert!(result.contains("INFO"));
        assert!(result.contains("Test message"));
        assert!(result.contains("main"));
    }

    #[test]
    fn test_json_format() {
        let record = record(LogLevel::Error, "Error occurred");
        let format = OutputFormat::Json;
        let result = format.format(&record, &TimestampFormat::Iso8601);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "ERROR");
        assert_eq!(parsed["message"], "Error occurred");
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_json_format_unix_timestamp() {
        let record = record(LogLevel::Debug, "tick");
        let format = OutputFormat::Json;
        let result = format.format(&record, &TimestampFormat::Unix);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["timestamp"].is_number());
    }

    #[test]
    fn test_logfmt_format() {
        let record = record(LogLevel::Warning, "Warning message");
        let format = OutputFormat::Logfmt;
        let result = format.format(&record, &TimestampFormat::Iso8601);

        assert!(result.contains("level=WARNING"));
        assert!(result.contains("message=\"Warning message\""));
    }

    #[test]
    fn test_logfmt_escape_special_chars() {
        let record = record(LogLevel::Debug, "value=1 with space");
        let format = OutputFormat::Logfmt;
        let result = format.format(&record, &TimestampFormat::Iso8601);

        assert!(result.contains("message=\"value=1 with space\""));
    }

    #[test]
    fn test_output_format_default() {
        let format = OutputFormat::default();
        assert_eq!(format, OutputFormat::Text);
    }
}
