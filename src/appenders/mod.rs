//! Reference appender implementations of the `Appender` contract.
//!
//! These ship so the crate is runnable and testable end to end, but they
//! are not part of the core pipeline — concrete sinks are external
//! collaborators (see `src/core`).

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;

#[cfg(feature = "console")]
pub use console::ConsoleAppender;
#[cfg(feature = "file")]
pub use file::FileAppender;
pub use memory::InMemoryAppender;

pub use crate::core::Appender;
