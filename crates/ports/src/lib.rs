//! # envlog-ports
//!
//! Port traits for the envlog hexagonal architecture.
//!
//! This crate defines the interfaces between the facade and the output
//! adapters. It depends only on `domain` and `shared`.

pub mod clock;
pub mod format;
pub mod logger;

pub use clock::Clock;
pub use format::LineFormatter;
pub use logger::{LogEvent, LoggerPort};

// Re-export domain types used in port signatures, so adapter crates can
// implement ports without directly depending on `envlog-domain`.
pub use envlog_domain::{Level, LogFields};

/// Returns the ports crate version.
#[must_use]
pub const fn ports_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
