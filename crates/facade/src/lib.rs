//! # envlog-facade
//!
//! Public entry point for consumers (CLI and embedding applications).
//! This crate depends on `adapters`, `config`, `domain`, `ports`, and `shared`.
//!
//! ```
//! use envlog_facade::{LogFields, Logger, LoggerOptions};
//!
//! let logger = Logger::new(&LoggerOptions::new("production", "info"), LogFields::new())?;
//! logger.info_message("service started");
//! # Ok::<(), envlog_facade::OptionsError>(())
//! ```

mod logger;

pub use logger::{Logger, LoggerBuilder};

pub use envlog_adapters::{
    FixedClock, LogSink, MemoryLogSink, StderrLogSink, StdoutLogSink, SystemClock,
};
pub use envlog_config::{
    ENV_ENVIRONMENT, ENV_LEVEL, LoggerEnv, LoggerOptions, OutputStream, StreamRouting,
    TransportConfig, TransportFormat, load_options_from_path,
};
pub use envlog_domain::{
    DEVELOPMENT_ENVIRONMENTS, ENVIRONMENTS, Environment, EnvironmentClass, LEVELS, Level,
    LevelColor, LogFields, OptionsError, PRODUCTION_ENVIRONMENTS, ValidatedOptions, fields,
    level_colors, level_ranks, timestamp_value, validate,
};
pub use envlog_ports::Clock;
/// Shared error envelope.
pub use envlog_shared::{ErrorCode, ErrorEnvelope};

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
