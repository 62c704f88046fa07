//! Environment variable parsing for logger options.
//!
//! Parsing is strict: a variable that is present but blank fails fast rather
//! than silently falling back to a default.

use envlog_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;

/// Env var: environment tag.
pub const ENV_ENVIRONMENT: &str = "ENVLOG_ENV";
/// Env var: minimum level tag.
pub const ENV_LEVEL: &str = "ENVLOG_LEVEL";

/// Env parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvParseError {
    /// A variable is set but empty after trimming.
    #[error("environment variable {var} is set but empty")]
    EmptyValue {
        /// Variable name.
        var: &'static str,
    },
}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let message = error.to_string();
        match error {
            EnvParseError::EmptyValue { var } => {
                Self::expected(ErrorCode::new("config", "empty_env_value"), message)
                    .with_metadata("var", var)
            },
        }
    }
}

/// Option overrides read from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerEnv {
    /// `ENVLOG_ENV`, trimmed.
    pub env: Option<String>,
    /// `ENVLOG_LEVEL`, trimmed.
    pub level: Option<String>,
}

impl LoggerEnv {
    /// Parse from an explicit variable map.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            env: parse_optional_trimmed_string(map, ENV_ENVIRONMENT)?,
            level: parse_optional_trimmed_string(map, ENV_LEVEL)?,
        })
    }

    /// Parse from the current process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let map = [ENV_ENVIRONMENT, ENV_LEVEL]
            .into_iter()
            .filter_map(|var| std::env::var(var).ok().map(|value| (var.to_owned(), value)))
            .collect();
        Self::from_map(&map)
    }

    /// Returns true when no override is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.env.is_none() && self.level.is_none()
    }
}

fn parse_optional_trimmed_string(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<String>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    Ok(Some(trimmed.to_owned()))
}
