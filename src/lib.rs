#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `clog` is a coloured console logger with per-caller verbosity control.
//! Call sites use plain macros (`info!`, `warnf!`, `fatalln!`, ...) without
//! passing a handle; each invocation records the module, function, file and
//! line it was expanded in, and thresholds installed for package or function
//! paths decide whether the line is written.
//!
//! # Design
//!
//! - [`logging`] supplies [`Level`], [`CallSite`] and the hierarchical
//!   [`LevelRegistry`].
//! - [`logging_sink`] supplies the per-tier outputs and prefix styling.
//! - [`Logger`] combines both. The process-wide instance behind [`logger`]
//!   backs the macros and the free configuration functions; tests build
//!   their own and pass it with the `logger: &l,` macro form.
//!
//! Each tier has three calling conventions:
//!
//! | Tier | values | template | line |
//! |------|--------|----------|------|
//! | debug | [`debug!`] | [`debugf!`] | [`debugln!`] |
//! | info | [`info!`] | [`infof!`] | [`infoln!`] |
//! | warn | [`warn!`] | [`warnf!`] | [`warnln!`] |
//! | error | [`fatal!`] | [`fatalf!`] | [`fatalln!`] |
//!
//! # Invariants
//!
//! - A function-level threshold takes precedence over any package-level one.
//! - A line is written with one locked write, so concurrent calls never tear.
//! - An unsuppressed fatal-tier call exits the process with status 1.
//!
//! # Errors
//!
//! Emission never fails; write errors from a sink are dropped. Only
//! directive parsing ([`apply_directives`], [`init_from_env`]) returns
//! [`DirectiveError`].
//!
//! # Examples
//!
//! ```
//! use clog::{Level, Logger, MemorySink};
//!
//! let logger = Logger::new();
//! logger.set_color_mode(clog::ColorMode::Never);
//! let capture = MemorySink::new();
//! let _ = logger.set_output(Level::Debug, capture.clone());
//! let _ = logger.set_output(Level::Warn, capture.clone());
//!
//! // Silence everything below warn for the module this example runs in.
//! logger.set_path_level(clog::call_site!().package_path(), Level::Warn);
//!
//! clog::debug!(logger: &logger, "not shown");
//! clog::warnln!(logger: &logger, "disk", "low");
//! assert_eq!(capture.contents().lines().count(), 1);
//! assert!(capture.contents().ends_with(": disk low\n"));
//! ```
//!
//! # See also
//!
//! - [`LevelDirectives`] for the `path=level` syntax read from `CLOG_LEVEL`.

#[cfg(feature = "tracing")]
mod bridge;
mod global;
mod logger;
mod macros;
mod render;

#[cfg(feature = "tracing")]
pub use bridge::{ClogLayer, init_tracing};
pub use global::{
    apply_directives, init_from_env, logger, path_level, set_color_mode, set_debug_output,
    set_debug_prefix, set_error_output, set_error_prefix, set_info_output, set_info_prefix,
    set_main_prefix_name, set_path_level, set_warn_output, set_warn_prefix,
};
pub use logger::{FATAL_EXIT_STATUS, Logger};
pub use logging::{
    CallSite, DirectiveError, LEVEL_ENV_VAR, Level, LevelDirectives, LevelRegistry,
    ParseLevelError, Resolution, call_site, function_path, path,
};
pub use logging_sink::{BoxedWriter, ColorMode, MemorySink};
pub use render::Body;
