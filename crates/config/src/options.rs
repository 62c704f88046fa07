//! Raw logger options as supplied by callers, files, or the environment.

use envlog_domain::{OptionsError, ValidatedOptions, validate};
use serde::{Deserialize, Serialize};

/// Default environment when no source supplies one.
pub const DEFAULT_ENVIRONMENT: &str = "development";
/// Default level when no source supplies one.
pub const DEFAULT_LEVEL: &str = "info";

/// Unvalidated `{ env, level }` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerOptions {
    /// Environment tag (`development`, `test`, `stage`, `production`).
    #[serde(alias = "environment")]
    pub env: String,
    /// Minimum level tag (`test`, `error`, `warn`, `info`, `debug`).
    pub level: String,
}

impl LoggerOptions {
    /// Create options from raw tags.
    pub fn new(env: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            env: env.into(),
            level: level.into(),
        }
    }

    /// Validate against the supported tables (level first).
    pub fn validate(&self) -> Result<ValidatedOptions, OptionsError> {
        validate(&self.env, &self.level)
    }
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ENVIRONMENT, DEFAULT_LEVEL)
    }
}
