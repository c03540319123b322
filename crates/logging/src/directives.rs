//! crates/logging/src/directives.rs
//! Parsing of `path=level` directive lists such as `app/db=warn,app=debug`.

use std::env::VarError;
use std::str::FromStr;

use crate::level::{Level, ParseLevelError};
use crate::registry::LevelRegistry;

/// Environment variable consulted for directives at start-up.
pub const LEVEL_ENV_VAR: &str = "CLOG_LEVEL";

/// Error produced when a directive list cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DirectiveError {
    /// The directive has no `=` separator.
    #[error("directive `{directive}` is missing `=<level>`")]
    MissingLevel {
        /// The offending directive.
        directive: String,
    },
    /// The directive names an empty path.
    #[error("directive `{directive}` has an empty path")]
    EmptyPath {
        /// The offending directive.
        directive: String,
    },
    /// The level after `=` is not a known level name.
    #[error("directive `{directive}` has an invalid level")]
    InvalidLevel {
        /// The offending directive.
        directive: String,
        /// The underlying parse failure.
        #[source]
        source: ParseLevelError,
    },
    /// The environment variable holding the directives is not valid UTF-8.
    #[error("{variable} is not valid UTF-8")]
    NotUnicode {
        /// Name of the environment variable.
        variable: String,
    },
}

/// Ordered list of `(path, level)` thresholds parsed from a directive string.
///
/// Directives are separated by commas; whitespace around each directive is
/// ignored and empty directives are skipped. Later directives for the same
/// path override earlier ones once applied.
///
/// # Examples
///
/// ```
/// use logging::{Level, LevelDirectives, LevelRegistry};
///
/// let directives: LevelDirectives = "app/db=warn, app/db.query=debug".parse()?;
/// let registry = LevelRegistry::new();
/// directives.apply_to(&registry);
///
/// assert_eq!(registry.path_level("app/db/pool"), Some(Level::Warn));
/// assert_eq!(registry.exact_path_level("app/db.query"), Some(Level::Debug));
/// # Ok::<(), logging::DirectiveError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelDirectives {
    entries: Vec<(String, Level)>,
}

impl LevelDirectives {
    /// Creates an empty directive list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated directive list.
    pub fn parse(input: &str) -> Result<Self, DirectiveError> {
        let mut entries = Vec::new();
        for directive in input.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            entries.push(parse_directive(directive)?);
        }
        Ok(Self { entries })
    }

    /// Parses the value of the [`LEVEL_ENV_VAR`] environment variable as
    /// returned by [`std::env::var`].
    ///
    /// An unset variable yields an empty list. A value that is not valid
    /// UTF-8 is reported rather than ignored.
    pub fn from_env_value(value: Result<String, VarError>) -> Result<Self, DirectiveError> {
        match value {
            Ok(directives) => Self::parse(&directives),
            Err(VarError::NotPresent) => Ok(Self::new()),
            Err(VarError::NotUnicode(_)) => Err(DirectiveError::NotUnicode {
                variable: LEVEL_ENV_VAR.to_owned(),
            }),
        }
    }

    /// Appends a directive.
    pub fn push(&mut self, path: impl Into<String>, level: Level) {
        self.entries.push((path.into(), level));
    }

    /// Iterates over the parsed directives in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Level)> {
        self.entries.iter().map(|(path, level)| (path.as_str(), *level))
    }

    /// Returns the number of directives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Installs every directive into `registry` in order.
    pub fn apply_to(&self, registry: &LevelRegistry) {
        for (path, level) in &self.entries {
            registry.set_path_level(path.clone(), *level);
        }
    }
}

impl FromStr for LevelDirectives {
    type Err = DirectiveError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

fn parse_directive(directive: &str) -> Result<(String, Level), DirectiveError> {
    let Some((path, level)) = directive.split_once('=') else {
        return Err(DirectiveError::MissingLevel {
            directive: directive.to_owned(),
        });
    };

    let path = path.trim();
    if path.is_empty() {
        return Err(DirectiveError::EmptyPath {
            directive: directive.to_owned(),
        });
    }

    let level = level
        .parse::<Level>()
        .map_err(|source| DirectiveError::InvalidLevel {
            directive: directive.to_owned(),
            source,
        })?;

    Ok((path.to_owned(), level))
}
