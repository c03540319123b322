//! Process-wide default logger and the free configuration functions that
//! wrap it.

use std::io::Write;
use std::sync::OnceLock;

use logging::{DirectiveError, Level};
use logging_sink::{BoxedWriter, ColorMode};

use crate::logger::Logger;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide logger used by the emission macros.
pub fn logger() -> &'static Logger {
    DEFAULT.get_or_init(Logger::new)
}

/// Sets the threshold for a package or function path on the default logger.
///
/// # Examples
///
/// ```
/// use clog::Level;
///
/// clog::set_path_level("app/db", Level::Warn);
/// assert_eq!(clog::path_level("app/db/pool"), Some(Level::Warn));
/// ```
pub fn set_path_level(path: impl Into<String>, level: Level) {
    logger().set_path_level(path, level);
}

/// Returns the threshold that applies to `path` on the default logger.
pub fn path_level(path: &str) -> Option<Level> {
    logger().path_level(path)
}

/// Sets the debug tier's destination, returning the previous writer.
pub fn set_debug_output<W: Write + Send + 'static>(writer: W) -> BoxedWriter {
    logger().set_output(Level::Debug, writer)
}

/// Sets the info tier's destination, returning the previous writer.
pub fn set_info_output<W: Write + Send + 'static>(writer: W) -> BoxedWriter {
    logger().set_output(Level::Info, writer)
}

/// Sets the warn tier's destination, returning the previous writer.
pub fn set_warn_output<W: Write + Send + 'static>(writer: W) -> BoxedWriter {
    logger().set_output(Level::Warn, writer)
}

/// Sets the fatal tier's destination, returning the previous writer.
pub fn set_error_output<W: Write + Send + 'static>(writer: W) -> BoxedWriter {
    logger().set_output(Level::Error, writer)
}

/// Enables or disables the debug tier's prefix.
pub fn set_debug_prefix(use_prefix: bool) {
    logger().set_prefix(Level::Debug, use_prefix);
}

/// Enables or disables the info tier's prefix.
pub fn set_info_prefix(use_prefix: bool) {
    logger().set_prefix(Level::Info, use_prefix);
}

/// Enables or disables the warn tier's prefix.
pub fn set_warn_prefix(use_prefix: bool) {
    logger().set_prefix(Level::Warn, use_prefix);
}

/// Enables or disables the fatal tier's prefix.
pub fn set_error_prefix(use_prefix: bool) {
    logger().set_prefix(Level::Error, use_prefix);
}

/// Sets the name shown for call sites in the program's entry module.
pub fn set_main_prefix_name(name: impl Into<String>) {
    logger().set_main_prefix_name(name);
}

/// Selects whether the default logger colours its prefixes.
pub fn set_color_mode(mode: ColorMode) {
    logger().set_color_mode(mode);
}

/// Installs comma-separated `path=level` directives on the default logger.
pub fn apply_directives(directives: &str) -> Result<(), DirectiveError> {
    logger().apply_directives(directives)
}

/// Installs the directives held in `CLOG_LEVEL`, if the variable is set.
pub fn init_from_env() -> Result<(), DirectiveError> {
    logger().init_from_env()
}
