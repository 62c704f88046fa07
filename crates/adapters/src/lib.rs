//! # envlog-adapters
//!
//! Adapter implementations for ports (console logger, formatters, sinks,
//! clocks). This crate depends on `ports`, `config`, `domain`, and `shared`.

pub mod clock;
/// Line formatters and ANSI styling.
pub mod format;
pub mod log_sink;
pub mod logger;

pub use clock::{FixedClock, SystemClock};
pub use format::{JsonFormatter, PrettyFormatter, formatter_for};
pub use log_sink::{LogSink, MemoryLogSink, StderrLogSink, StdoutLogSink};
pub use logger::ConsoleLogger;

/// Returns the adapters crate version.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
