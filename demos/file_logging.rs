//! File logging example
//!
//! Demonstrates logging to both a console appender and a file appender
//! simultaneously, each running on its own worker thread.
//!
//! Run with: cargo run --example file_logging

use async_log_pipeline::prelude::*;

fn main() -> Result<()> {
    println!("=== async_log_pipeline - File Logging Example ===\n");

    let writer = build_log_writer(
        vec![
            (Box::new(ConsoleAppender::new()), LogLevel::Debug),
            (Box::new(FileAppender::new("application.log")), LogLevel::Debug),
        ],
        None,
    )?;

    println!("1. Logging to both console and file:");
    writer.log(LogLevel::Info, "Application started", "app")?;
    writer.log(LogLevel::Debug, "Loading configuration...", "app")?;
    writer.log(LogLevel::Info, "Configuration loaded successfully", "app")?;
    writer.log(LogLevel::Warning, "Using default settings for some options", "app")?;
    writer.log(LogLevel::Error, "Failed to load optional plugin", "app")?;

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        writer.log(LogLevel::Info, format!("Processing item {i}/5"), "worker")?;
        if i == 3 {
            writer.log(LogLevel::Warning, "Item 3 took longer than expected", "worker")?;
        }
    }

    // Dropping `writer` drains the main queue and flushes/tears down both
    // appenders before returning.
    drop(writer);

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
