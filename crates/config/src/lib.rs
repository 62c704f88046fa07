//! # envlog-config
//!
//! Transport profiles, stream routing, and option loading.
//! This crate depends on `domain` and `shared` only.

/// Environment variable parsing.
pub mod env;
/// Option loading helpers (env + file + defaults).
pub mod load;
/// Raw logger options.
pub mod options;
/// Transport profiles and stream routing.
pub mod transport;

pub use env::{ENV_ENVIRONMENT, ENV_LEVEL, EnvParseError, LoggerEnv};
pub use load::load_options_from_path;
pub use options::{DEFAULT_ENVIRONMENT, DEFAULT_LEVEL, LoggerOptions};
pub use transport::{OutputStream, StreamRouting, TransportConfig, TransportFormat};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
