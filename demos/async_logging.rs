//! Multi-producer logging example
//!
//! Demonstrates many producer threads feeding a single writer concurrently,
//! with the dispatcher and a file appender each running on their own
//! background thread.
//!
//! Run with: cargo run --example async_logging

use async_log_pipeline::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== async_log_pipeline - Multi-Producer Example ===\n");

    let writer = Arc::new(build_log_writer(
        vec![(Box::new(FileAppender::new("async_test.log")), LogLevel::Debug)],
        None,
    )?);

    println!("1. Logging many messages from the main thread:");
    for i in 0..100 {
        writer.log(LogLevel::Info, format!("Message #{i}"), "main")?;
    }
    println!("   Logged 100 messages");

    println!("\n2. Multi-threaded logging:");
    let mut handles = vec![];
    for thread_id in 0..5 {
        let writer = Arc::clone(&writer);
        handles.push(thread::spawn(move || {
            for i in 0..20 {
                writer
                    .log(LogLevel::Info, format!("Thread {thread_id} - Message {i}"), "worker")
                    .ok();
                thread::sleep(Duration::from_millis(10));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    println!("   5 threads logged 20 messages each");

    // Give the dispatcher and appender worker time to drain before the
    // process exits via the final Arc's drop.
    thread::sleep(Duration::from_millis(200));

    println!("\n=== Example completed successfully! ===");
    println!("Check 'async_test.log' for file output");

    Ok(())
}
