//! crates/logging/src/level.rs
//! Severity levels shared by the registry and the emitter tiers.

use std::fmt;
use std::str::FromStr;

/// Severity of a log event.
///
/// Levels are ordered `Debug < Info < Warn < Error`. The discriminants are
/// spaced four apart; only their relative order is part of the contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(i8)]
pub enum Level {
    /// Debug messages (magenta).
    Debug = -4,
    /// Informational messages (cyan).
    Info = 0,
    /// Non-fatal warnings (red, with source location).
    Warn = 4,
    /// Fatal errors (red, with source location). Emitting one terminates the
    /// process.
    Error = 8,
}

impl Level {
    /// Every level in ascending order of severity.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Returns the lowercase name used when rendering or parsing the level.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::Debug.as_str(), "debug");
    /// assert_eq!(Level::Error.as_str(), "error");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Returns the dense slot index (`0..4`) of the level.
    ///
    /// Per-tier tables such as the output sinks are laid out in this order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Warn => 2,
            Self::Error => 3,
        }
    }

    /// Returns the numeric representation of the level.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Reports whether messages of this level carry a `file:line` tag.
    #[must_use]
    pub const fn shows_location(self) -> bool {
        matches!(self, Self::Warn | Self::Error)
    }

    /// Reports whether emitting a message of this level terminates the process.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised log level `{input}` (expected debug, info, warn or error)")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let level = if trimmed.eq_ignore_ascii_case("debug") {
            Self::Debug
        } else if trimmed.eq_ignore_ascii_case("info") {
            Self::Info
        } else if trimmed.eq_ignore_ascii_case("warn") || trimmed.eq_ignore_ascii_case("warning") {
            Self::Warn
        } else if trimmed.eq_ignore_ascii_case("error") || trimmed.eq_ignore_ascii_case("fatal") {
            Self::Error
        } else {
            return Err(ParseLevelError {
                input: input.to_owned(),
            });
        };
        Ok(level)
    }
}
