//! Logging abstractions
//!
//! The service never installs a global logger. Embedders hand it a
//! `SharedLogger` and decide where diagnostics end up.

mod traits;
mod sinks;
mod memory;

pub use traits::{LogLevel, Logger, SharedLogger};
pub use sinks::{ConsoleLogger, NoOpLogger, LOG_LEVEL_ENV};
pub use memory::{LogEntry, MemoryLogger};
