//! # envlog-domain
//!
//! Domain model for envlog:
//!
//! - **Environments** - `Environment`, `EnvironmentClass`, and the dev/prod sets
//! - **Levels** - `Level` with rank and display color
//! - **Metadata** - `LogFields` and the base/call-site merge rule
//! - **Validation** - `validate` and `OptionsError`
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` crate
//! - No I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use envlog_shared::shared_crate_version;

pub mod environment;
pub mod level;
pub mod metadata;
pub mod validation;

pub use environment::{
    DEVELOPMENT_ENVIRONMENTS, ENVIRONMENTS, Environment, EnvironmentClass,
    PRODUCTION_ENVIRONMENTS, UnknownEnvironment,
};
pub use level::{LEVELS, Level, LevelColor, UnknownLevel, level_colors, level_ranks};
pub use metadata::{LogFields, fields, format_timestamp, merge_fields, timestamp_value};
pub use validation::{OptionsError, ValidatedOptions, validate};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
