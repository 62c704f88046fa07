//! Logger option validation.

use crate::environment::{Environment, EnvironmentClass};
use crate::level::Level;
use envlog_shared::{ErrorCode, ErrorEnvelope};

/// Construction failures for a logger. Both are misconfigurations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    /// The level is not a key of the rank table.
    #[error("Log Level '{level}' is not available")]
    InvalidLevel {
        /// Rejected level tag.
        level: String,
    },
    /// The environment is not in the environment set.
    #[error("Environment '{environment}' is not available")]
    InvalidEnvironment {
        /// Rejected environment tag.
        environment: String,
    },
}

impl OptionsError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidLevel { .. } => ErrorCode::new("logger", "invalid_level"),
            Self::InvalidEnvironment { .. } => ErrorCode::new("logger", "invalid_environment"),
        }
    }
}

impl From<OptionsError> for ErrorEnvelope {
    fn from(error: OptionsError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            OptionsError::InvalidLevel { level } => envelope.with_metadata("level", level),
            OptionsError::InvalidEnvironment { environment } => {
                envelope.with_metadata("environment", environment)
            },
        }
    }
}

/// Options that passed [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedOptions {
    /// Target environment.
    pub environment: Environment,
    /// Minimum emitted level.
    pub level: Level,
}

impl ValidatedOptions {
    /// Output class of the environment.
    #[must_use]
    pub const fn class(&self) -> EnvironmentClass {
        self.environment.class()
    }
}

/// Check a raw environment and level against the supported tables.
///
/// The level is checked first; the first failure is returned.
pub fn validate(environment: &str, level: &str) -> Result<ValidatedOptions, OptionsError> {
    let Some(level) = Level::from_tag(level) else {
        return Err(OptionsError::InvalidLevel {
            level: level.to_owned(),
        });
    };

    let Some(environment) = Environment::from_tag(environment) else {
        return Err(OptionsError::InvalidEnvironment {
            environment: environment.to_owned(),
        });
    };

    Ok(ValidatedOptions { environment, level })
}
