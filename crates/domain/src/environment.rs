//! Deployment environments and their output classes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environments that render human-readable, colorized output.
pub const DEVELOPMENT_ENVIRONMENTS: [Environment; 2] = [Environment::Development, Environment::Test];

/// Environments that render single-line JSON output.
pub const PRODUCTION_ENVIRONMENTS: [Environment; 2] =
    [Environment::Stage, Environment::Production];

/// Every supported environment, development class first.
pub const ENVIRONMENTS: [Environment; 4] = [
    Environment::Development,
    Environment::Test,
    Environment::Stage,
    Environment::Production,
];

/// Deployment environment a logger is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development.
    Development,
    /// Automated test runs.
    Test,
    /// Staging deployment.
    Stage,
    /// Production deployment.
    Production,
}

/// Output class derived from an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentClass {
    /// Read by people at a terminal.
    Interactive,
    /// Read by log collectors.
    Structured,
}

impl Environment {
    /// Returns the canonical string identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Stage => "stage",
            Self::Production => "production",
        }
    }

    /// Returns the output class for this environment.
    #[must_use]
    pub const fn class(self) -> EnvironmentClass {
        match self {
            Self::Development | Self::Test => EnvironmentClass::Interactive,
            Self::Stage | Self::Production => EnvironmentClass::Structured,
        }
    }

    /// Returns true for stage and production.
    #[must_use]
    pub const fn is_production_class(self) -> bool {
        matches!(self.class(), EnvironmentClass::Structured)
    }

    /// Look up an environment by its exact tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        ENVIRONMENTS
            .into_iter()
            .find(|environment| environment.as_str() == tag)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned when a string is not a supported environment tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Environment '{0}' is not available")]
pub struct UnknownEnvironment(pub String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_tag(input).ok_or_else(|| UnknownEnvironment(input.to_owned()))
    }
}

impl fmt::Display for EnvironmentClass {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interactive => formatter.write_str("interactive"),
            Self::Structured => formatter.write_str("structured"),
        }
    }
}
