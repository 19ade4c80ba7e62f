//! Basic pipeline usage example
//!
//! Demonstrates building a writer with a console appender and logging at
//! different levels.
//!
//! Run with: cargo run --example basic_usage

use async_log_pipeline::prelude::*;

fn main() -> Result<()> {
    println!("=== async_log_pipeline - Basic Usage Example ===\n");

    let writer = build_log_writer(
        vec![(Box::new(ConsoleAppender::new()), LogLevel::Debug)],
        None,
    )?;

    println!("1. Logging at different levels:");
    writer.log(LogLevel::Debug, "This is a debug message", "demo")?;
    writer.log(LogLevel::Info, "This is an info message", "demo")?;
    writer.log(LogLevel::Warning, "This is a warning message", "demo")?;
    writer.log(LogLevel::Error, "This is an error message", "demo")?;
    writer.log(LogLevel::Fatal, "This is a fatal message", "demo")?;

    println!("\n2. Disabling the writer silences further calls:");
    writer.disable();
    writer.log(LogLevel::Fatal, "This will not print", "demo")?;
    writer.enable();
    writer.log(LogLevel::Info, "Logging resumed", "demo")?;

    // Dropping `writer` here drains the main queue, tears down the
    // dispatcher, and flushes every appender before the process exits.
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
