//! The logger context: registry, tier outputs and display settings.

use std::io::Write;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use logging::{
    CallSite, DirectiveError, LEVEL_ENV_VAR, Level, LevelDirectives, LevelRegistry, Resolution,
};
use logging_sink::{BoxedWriter, ColorMode, TierOutputs};

use crate::render::{Body, PrefixParts, render_line};

/// Exit status used when a fatal message terminates the process.
pub const FATAL_EXIT_STATUS: i32 = 1;

/// All state consulted by a log call.
///
/// The process-wide instance returned by [`logger`](crate::logger) backs the
/// emission macros and the free configuration functions. Tests and embedders
/// can build their own instance and target it with the `logger:` form of the
/// macros.
///
/// # Examples
///
/// ```
/// use clog::{Level, Logger, MemorySink};
///
/// let logger = Logger::new();
/// logger.set_color_mode(clog::ColorMode::Never);
/// let capture = MemorySink::new();
/// let _stderr = logger.set_output(Level::Info, capture.clone());
///
/// clog::infof!(logger: &logger, "count={}", 5);
/// assert!(capture.contents().ends_with(": count=5\n"));
/// ```
#[derive(Debug)]
pub struct Logger {
    registry: LevelRegistry,
    outputs: TierOutputs,
    main_prefix_name: RwLock<Option<String>>,
    colors: AtomicBool,
}

impl Logger {
    /// Creates a logger with no thresholds, every tier on standard error with
    /// prefixes enabled, and colour chosen by [`ColorMode::from_env`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolution(Resolution::default())
    }

    /// Creates a logger like [`Logger::new`] whose registry resolves
    /// thresholds with the given [`Resolution`] policy.
    #[must_use]
    pub fn with_resolution(resolution: Resolution) -> Self {
        Self {
            registry: LevelRegistry::with_resolution(resolution),
            outputs: TierOutputs::new(),
            main_prefix_name: RwLock::new(None),
            colors: AtomicBool::new(ColorMode::from_env().enabled()),
        }
    }

    /// Returns the threshold registry.
    #[must_use]
    pub const fn registry(&self) -> &LevelRegistry {
        &self.registry
    }

    /// Returns the per-tier outputs.
    #[must_use]
    pub const fn outputs(&self) -> &TierOutputs {
        &self.outputs
    }

    /// Sets the threshold for a package (`app/worker`) or function
    /// (`app/worker.process`) path.
    pub fn set_path_level(&self, path: impl Into<String>, level: Level) {
        self.registry.set_path_level(path, level);
    }

    /// Returns the threshold that applies to `path` or its nearest ancestor.
    #[must_use]
    pub fn path_level(&self, path: &str) -> Option<Level> {
        self.registry.path_level(path)
    }

    /// Parses `directives` (`path=level,...`) and installs them.
    ///
    /// Nothing is installed when any directive is malformed.
    pub fn apply_directives(&self, directives: &str) -> Result<(), DirectiveError> {
        LevelDirectives::parse(directives)?.apply_to(&self.registry);
        Ok(())
    }

    /// Installs the directives found in the `CLOG_LEVEL` environment
    /// variable, if it is set.
    ///
    /// A value that is not valid UTF-8 is an error.
    pub fn init_from_env(&self) -> Result<(), DirectiveError> {
        LevelDirectives::from_env_value(std::env::var(LEVEL_ENV_VAR))?.apply_to(&self.registry);
        Ok(())
    }

    /// Sets the destination of `level`'s messages, returning the previous
    /// writer.
    pub fn set_output<W>(&self, level: Level, writer: W) -> BoxedWriter
    where
        W: Write + Send + 'static,
    {
        self.outputs.set_output(level, writer)
    }

    /// Enables or disables the prefix of `level`'s messages.
    pub fn set_prefix(&self, level: Level, use_prefix: bool) {
        self.outputs.set_prefix(level, use_prefix);
    }

    /// Sets the name displayed instead of the crate name for call sites in the
    /// program's entry module. An empty name restores the crate name.
    pub fn set_main_prefix_name(&self, name: impl Into<String>) {
        let name = name.into();
        *self
            .main_prefix_name
            .write()
            .unwrap_or_else(PoisonError::into_inner) = (!name.is_empty()).then_some(name);
    }

    /// Returns the entry-module display name, if one is set.
    #[must_use]
    pub fn main_prefix_name(&self) -> Option<String> {
        self.main_prefix_name
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Selects whether prefixes carry ANSI colour.
    pub fn set_color_mode(&self, mode: ColorMode) {
        self.colors.store(mode.enabled(), Ordering::Relaxed);
    }

    /// Returns the current colour mode.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        if self.colors.load(Ordering::Relaxed) {
            ColorMode::Always
        } else {
            ColorMode::Never
        }
    }

    /// Reports whether a `level` message from `site` would be written.
    #[must_use]
    pub fn enabled(&self, level: Level, site: Option<&CallSite>) -> bool {
        !self.registry.suppresses(site, level)
    }

    /// Writes one message unless a threshold suppresses it, returning whether
    /// it was written. Never terminates the process, even for
    /// [`Level::Error`].
    pub fn log(&self, level: Level, site: Option<&CallSite>, body: Body<'_>) -> bool {
        if self.registry.suppresses(site, level) {
            return false;
        }

        let main_name = site
            .filter(|site| site.is_entry_module())
            .and_then(|_| self.main_prefix_name());
        let prefix = match site {
            Some(site) if self.outputs.uses_prefix(level) => Some(PrefixParts {
                display_name: main_name.as_deref().unwrap_or_else(|| site.package_name()),
                colors: self.color_mode(),
            }),
            _ => None,
        };

        let line = render_line(level, site, prefix, &body);
        // Emission is infallible; a failing sink loses the line.
        let _ = self.outputs.write_line(level, &line);
        true
    }

    /// Writes one message like [`log`](Self::log), then terminates the process
    /// with [`FATAL_EXIT_STATUS`] if the message was an unsuppressed
    /// [`Level::Error`].
    pub fn emit(&self, level: Level, site: Option<&CallSite>, body: Body<'_>) {
        if self.log(level, site, body) && level.is_fatal() {
            let _ = self.outputs.flush_all();
            process::exit(FATAL_EXIT_STATUS);
        }
    }

    /// Restores the initial configuration: no thresholds, standard error
    /// outputs with prefixes, no entry-module name. Colour mode is left as is.
    pub fn reset(&self) {
        self.registry.clear();
        for level in Level::ALL {
            drop(self.outputs.set_boxed_output(level, Box::new(std::io::stderr())));
            self.outputs.set_prefix(level, true);
        }
        self.set_main_prefix_name("");
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging_sink::MemorySink;

    fn quiet_logger() -> (Logger, MemorySink) {
        let logger = Logger::new();
        logger.set_color_mode(ColorMode::Never);
        let capture = MemorySink::new();
        for level in Level::ALL {
            let _ = logger.set_output(level, capture.clone());
        }
        (logger, capture)
    }

    fn worker_site() -> CallSite {
        CallSite::from_function_path("app/worker.Process", "src/worker.rs", 8)
    }

    #[test]
    fn exact_resolution_ignores_ancestor_thresholds() {
        let logger = Logger::with_resolution(Resolution::Exact);
        logger.set_color_mode(ColorMode::Never);
        let capture = MemorySink::new();
        let _ = logger.set_output(Level::Debug, capture.clone());
        logger.set_path_level("app", Level::Error);

        assert_eq!(logger.registry().resolution(), Resolution::Exact);
        assert!(logger.log(Level::Debug, Some(&worker_site()), Body::Print(&[&"kept"])));
        assert_eq!(capture.contents(), "worker: kept\n");

        logger.set_path_level("app/worker", Level::Info);
        assert!(!logger.log(Level::Debug, Some(&worker_site()), Body::Print(&[&"dropped"])));
        assert_eq!(Logger::new().registry().resolution(), Resolution::Hierarchical);
    }

    #[test]
    fn suppressed_messages_write_nothing() {
        let (logger, capture) = quiet_logger();
        logger.set_path_level("app/worker", Level::Warn);

        let written = logger.log(Level::Debug, Some(&worker_site()), Body::Print(&[&"hidden"]));
        assert!(!written);
        assert!(capture.is_empty());
    }

    #[test]
    fn emitted_warning_carries_tag_and_location() {
        let (logger, capture) = quiet_logger();
        logger.set_path_level("app/worker", Level::Warn);

        assert!(logger.log(Level::Warn, Some(&worker_site()), Body::Print(&[&"slow"])));
        assert_eq!(capture.contents(), "worker: src/worker.rs:8: slow\n");
    }

    #[test]
    fn error_tier_log_does_not_exit() {
        let (logger, capture) = quiet_logger();
        assert!(logger.log(Level::Error, Some(&worker_site()), Body::Line(&[&"bad", &1])));
        assert_eq!(capture.contents(), "worker: src/worker.rs:8: bad 1\n");
    }

    #[test]
    fn error_threshold_never_suppresses_the_fatal_tier() {
        let (logger, capture) = quiet_logger();
        logger.set_path_level("app/worker.Process", Level::Error);

        assert!(logger.enabled(Level::Error, Some(&worker_site())));
        assert!(!logger.enabled(Level::Warn, Some(&worker_site())));

        logger.emit(Level::Warn, Some(&worker_site()), Body::Print(&[&"x"]));
        assert!(capture.is_empty());
    }

    #[test]
    fn emit_below_fatal_returns_normally() {
        let (logger, capture) = quiet_logger();
        logger.emit(Level::Info, Some(&worker_site()), Body::Print(&[&"on"]));
        assert_eq!(capture.contents(), "worker: on
");
    }

    #[test]
    fn disabled_prefix_writes_body_only() {
        let (logger, capture) = quiet_logger();
        logger.set_prefix(Level::Info, false);
        logger.log(Level::Info, Some(&worker_site()), Body::Format(format_args!("n={}", 3)));
        assert_eq!(capture.contents(), "n=3\n");
    }

    #[test]
    fn unattributed_messages_have_no_prefix_and_are_never_suppressed() {
        let (logger, capture) = quiet_logger();
        logger.set_path_level("", Level::Error);
        assert!(logger.log(Level::Debug, None, Body::Print(&[&"raw"])));
        assert_eq!(capture.contents(), "raw\n");
    }

    #[test]
    fn main_prefix_name_applies_to_entry_module_only() {
        let (logger, capture) = quiet_logger();
        logger.set_main_prefix_name("tool");
        assert_eq!(logger.main_prefix_name().as_deref(), Some("tool"));

        let entry = CallSite::from_function_path("my_tool.main", "src/main.rs", 4);
        logger.log(Level::Info, Some(&entry), Body::Print(&[&"a"]));
        logger.log(Level::Info, Some(&worker_site()), Body::Print(&[&"b"]));
        assert_eq!(capture.take(), "tool: a\nworker: b\n");

        logger.set_main_prefix_name("");
        logger.log(Level::Info, Some(&entry), Body::Print(&[&"c"]));
        assert_eq!(capture.contents(), "my_tool: c\n");
    }

    #[test]
    fn directives_are_installed_atomically() {
        let logger = Logger::new();
        assert!(logger.apply_directives("app=warn,broken").is_err());
        assert!(logger.registry().is_empty());

        logger.apply_directives("app=warn, app/db.query=debug").expect("valid");
        assert_eq!(logger.path_level("app/db"), Some(Level::Warn));
        assert_eq!(logger.path_level("app/db.query"), Some(Level::Debug));
    }

    #[test]
    fn reset_restores_defaults() {
        let (logger, capture) = quiet_logger();
        logger.set_path_level("app", Level::Error);
        logger.set_prefix(Level::Warn, false);
        logger.set_main_prefix_name("tool");

        logger.reset();
        assert!(logger.registry().is_empty());
        assert!(logger.outputs().uses_prefix(Level::Warn));
        assert_eq!(logger.main_prefix_name(), None);
        assert_eq!(logger.color_mode(), ColorMode::Never);

        let _ = logger.set_output(Level::Info, capture.clone());
        logger.log(Level::Info, Some(&worker_site()), Body::Print(&[&"after"]));
        assert_eq!(capture.contents(), "worker: after\n");
    }
}
