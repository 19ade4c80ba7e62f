//! Rendering/formatting of `LogRecord`s into strings for the shipped
//! reference appenders. Kept outside `core` since rendering is an external
//! collaborator to the pipeline, not one of its components.

pub mod output_format;
pub mod timestamp;

pub use output_format::OutputFormat;
pub use timestamp::{FormatterConfig, TimestampFormat};
