//! Transport profiles and stream routing.
//!
//! A transport profile decides the shape of each output record; stream
//! routing decides which standard stream receives it.

use envlog_domain::{Environment, Level};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Output record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportFormat {
    /// `<timestamp> - <level>: <message>` with optional metadata block.
    Pretty,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for TransportFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => formatter.write_str("pretty"),
            Self::Json => formatter.write_str("json"),
        }
    }
}

/// Presentation profile for the console transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportConfig {
    /// Output record shape.
    pub format: TransportFormat,
    /// Prefix records with an ISO-8601 timestamp.
    pub timestamp: bool,
    /// Wrap the level (and metadata values) in ANSI colors.
    pub colorize: bool,
    /// Render metadata as an inspected object on its own line instead of
    /// inline `key=value` pairs.
    pub pretty_print: bool,
}

impl TransportConfig {
    /// Profile for development and test: timestamped, colorized, pretty.
    #[must_use]
    pub const fn dev() -> Self {
        Self {
            format: TransportFormat::Pretty,
            timestamp: true,
            colorize: true,
            pretty_print: true,
        }
    }

    /// Profile for stage and production: single-line JSON.
    #[must_use]
    pub const fn prod() -> Self {
        Self {
            format: TransportFormat::Json,
            timestamp: true,
            colorize: false,
            pretty_print: false,
        }
    }

    /// Profile for an environment: `prod` for the structured class, `dev` otherwise.
    #[must_use]
    pub const fn for_environment(environment: Environment) -> Self {
        if environment.is_production_class() {
            Self::prod()
        } else {
            Self::dev()
        }
    }
}

/// Standard stream an event is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStream {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

/// Level-to-stream assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRouting {
    stderr_levels: BTreeSet<Level>,
}

impl Default for StreamRouting {
    /// `error` and `debug` go to stderr; everything else to stdout.
    fn default() -> Self {
        Self::with_stderr_levels([Level::Error, Level::Debug])
    }
}

impl StreamRouting {
    /// Route exactly `levels` to stderr.
    pub fn with_stderr_levels(levels: impl IntoIterator<Item = Level>) -> Self {
        Self {
            stderr_levels: levels.into_iter().collect(),
        }
    }

    /// Stream for `level`.
    #[must_use]
    pub fn stream_for(&self, level: Level) -> OutputStream {
        if self.stderr_levels.contains(&level) {
            OutputStream::Stderr
        } else {
            OutputStream::Stdout
        }
    }

    /// Levels routed to stderr, most severe first.
    pub fn stderr_levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.stderr_levels.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envlog_domain::ENVIRONMENTS;

    #[test]
    fn profiles_follow_environment_class() {
        for environment in ENVIRONMENTS {
            let config = TransportConfig::for_environment(environment);
            let expected = if environment.is_production_class() {
                TransportFormat::Json
            } else {
                TransportFormat::Pretty
            };
            assert_eq!(config.format, expected, "{environment}");
        }
    }

    #[test]
    fn dev_profile_enables_presentation_flags() {
        let config = TransportConfig::dev();
        assert!(config.timestamp);
        assert!(config.colorize);
        assert!(config.pretty_print);
    }

    #[test]
    fn prod_profile_is_plain_json() {
        let config = TransportConfig::prod();
        assert_eq!(config.format, TransportFormat::Json);
        assert!(!config.colorize);
    }

    #[test]
    fn default_routing_splits_levels() {
        let routing = StreamRouting::default();
        assert_eq!(routing.stream_for(Level::Error), OutputStream::Stderr);
        assert_eq!(routing.stream_for(Level::Debug), OutputStream::Stderr);
        assert_eq!(routing.stream_for(Level::Info), OutputStream::Stdout);
        assert_eq!(routing.stream_for(Level::Warn), OutputStream::Stdout);
        assert_eq!(routing.stream_for(Level::Test), OutputStream::Stdout);
    }

    #[test]
    fn custom_routing_replaces_defaults() {
        let routing = StreamRouting::with_stderr_levels([Level::Test]);
        assert_eq!(routing.stream_for(Level::Test), OutputStream::Stderr);
        assert_eq!(routing.stream_for(Level::Error), OutputStream::Stdout);
        assert_eq!(routing.stderr_levels().collect::<Vec<_>>(), vec![Level::Test]);
    }
}
