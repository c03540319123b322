//! crates/logging/src/registry.rs
//! Process-wide mapping from hierarchical paths to level thresholds.

use std::iter;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

use crate::call_site::CallSite;
use crate::level::Level;
use crate::path::ancestors;

/// Strategy used by [`LevelRegistry::path_level`] to resolve a path.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Resolution {
    /// Only a verbatim key matches.
    Exact,
    /// Try the path, then each ancestor obtained by removing the last
    /// `/`-delimited segment, returning the first match.
    #[default]
    Hierarchical,
}

/// Thread-safe registry of level thresholds keyed by package or function
/// path.
///
/// Thresholds name the minimum level that is still emitted: a call whose
/// level is below the threshold that applies to it is suppressed.
///
/// # Examples
///
/// ```
/// use logging::{CallSite, Level, LevelRegistry};
///
/// let registry = LevelRegistry::new();
/// registry.set_path_level("app/worker", Level::Warn);
///
/// let site = CallSite::from_function_path("app/worker.process", "src/worker.rs", 10);
/// assert!(registry.suppresses(Some(&site), Level::Debug));
/// assert!(!registry.suppresses(Some(&site), Level::Warn));
/// ```
#[derive(Debug, Default)]
pub struct LevelRegistry {
    levels: Mutex<FxHashMap<String, Level>>,
    resolution: Resolution,
}

impl LevelRegistry {
    /// Creates an empty registry with hierarchical resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry using the given [`Resolution`] policy.
    #[must_use]
    pub fn with_resolution(resolution: Resolution) -> Self {
        Self {
            levels: Mutex::default(),
            resolution,
        }
    }

    /// Returns the resolution policy of the registry.
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Installs or overwrites the threshold for `path`.
    ///
    /// `path` may name a package (`github.com/user/repo/pkg`, `app/worker`)
    /// or a function (`app/worker.process`). Any string is accepted.
    pub fn set_path_level(&self, path: impl Into<String>, level: Level) {
        self.lock().insert(path.into(), level);
    }

    /// Removes the threshold installed for exactly `path`, returning it.
    pub fn remove_path_level(&self, path: &str) -> Option<Level> {
        self.lock().remove(path)
    }

    /// Returns the threshold that applies to `path` under the registry's
    /// [`Resolution`] policy.
    #[must_use]
    pub fn path_level(&self, path: &str) -> Option<Level> {
        match self.resolution {
            Resolution::Exact => self.exact_path_level(path),
            Resolution::Hierarchical => {
                let levels = self.lock();
                ancestors(path).find_map(|candidate| levels.get(candidate).copied())
            }
        }
    }

    /// Returns the threshold installed for exactly `path`.
    #[must_use]
    pub fn exact_path_level(&self, path: &str) -> Option<Level> {
        self.lock().get(path).copied()
    }

    /// Returns the threshold that applies to a call site.
    ///
    /// The function path is tried first and wins outright. Otherwise the
    /// package path and then each of its ancestors are tried, so the most
    /// specific entry decides. Under [`Resolution::Exact`] only the function
    /// and package paths themselves are consulted.
    #[must_use]
    pub fn threshold_for(&self, site: &CallSite) -> Option<Level> {
        let levels = self.lock();
        let lookup = |candidate: &str| levels.get(candidate).copied();
        match self.resolution {
            Resolution::Exact => {
                lookup(site.function_path()).or_else(|| lookup(site.package_path()))
            }
            Resolution::Hierarchical => iter::once(site.function_path())
                .chain(ancestors(site.package_path()))
                .find_map(lookup),
        }
    }

    /// Reports whether a message of `level` issued from `site` is suppressed.
    ///
    /// Unattributed calls (`None`) are never suppressed.
    #[must_use]
    pub fn suppresses(&self, site: Option<&CallSite>, level: Level) -> bool {
        site.and_then(|site| self.threshold_for(site))
            .is_some_and(|threshold| threshold > level)
    }

    /// Removes every installed threshold.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns the number of installed thresholds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether no threshold is installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns a copy of the installed thresholds sorted by path.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, Level)> {
        let mut entries: Vec<_> = self
            .lock()
            .iter()
            .map(|(path, level)| (path.clone(), *level))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<String, Level>> {
        // Every mutation is a single map call, so a poisoned map is still
        // consistent.
        self.levels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
