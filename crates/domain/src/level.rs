//! Severity levels with their rank and display color.
//!
//! A lower rank is more severe. A logger configured at level `M` emits a call
//! at level `L` when `L.rank() <= M.rank()`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every supported level, most severe first.
pub const LEVELS: [Level; 5] = [
    Level::Test,
    Level::Error,
    Level::Warn,
    Level::Info,
    Level::Debug,
];

/// Logging severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Custom level used by test harnesses; always emitted.
    Test,
    /// Error.
    Error,
    /// Warn.
    Warn,
    /// Info.
    Info,
    /// Debug.
    Debug,
}

/// Named display color for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelColor {
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Cyan.
    Cyan,
}

impl Level {
    /// Returns the canonical string identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Numeric rank used for threshold filtering.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Test => 0,
            Self::Error => 1,
            Self::Warn => 2,
            Self::Info => 3,
            Self::Debug => 4,
        }
    }

    /// Display color.
    #[must_use]
    pub const fn color(self) -> LevelColor {
        match self {
            Self::Test | Self::Info => LevelColor::Cyan,
            Self::Error => LevelColor::Red,
            Self::Warn => LevelColor::Yellow,
            Self::Debug => LevelColor::Blue,
        }
    }

    /// Returns true when a call at `self` passes a logger configured at `threshold`.
    #[must_use]
    pub const fn is_enabled_at(self, threshold: Self) -> bool {
        self.rank() <= threshold.rank()
    }

    /// Look up a level by its exact tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        LEVELS.into_iter().find(|level| level.as_str() == tag)
    }
}

impl LevelColor {
    /// Returns the color name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
        }
    }
}

/// The level-to-rank table, most severe first.
#[must_use]
pub fn level_ranks() -> Vec<(&'static str, u8)> {
    LEVELS
        .into_iter()
        .map(|level| (level.as_str(), level.rank()))
        .collect()
}

/// The level-to-color table, most severe first.
#[must_use]
pub fn level_colors() -> Vec<(&'static str, &'static str)> {
    LEVELS
        .into_iter()
        .map(|level| (level.as_str(), level.color().as_str()))
        .collect()
}

impl fmt::Display for Level {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl fmt::Display for LevelColor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned when a string is not a supported level tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Log Level '{0}' is not available")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_tag(input).ok_or_else(|| UnknownLevel(input.to_owned()))
    }
}
