#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` holds the verbosity model of the coloured logger: the ordered
//! [`Level`] enumeration, the hierarchical [`path`] helpers, the
//! [`CallSite`] descriptor captured at every log invocation, and the
//! [`LevelRegistry`] that maps package and function paths to thresholds.
//!
//! # Design
//!
//! Paths are slash-delimited package paths with an optional `.`-separated
//! function suffix (`app/worker.process`). Rust module paths are converted
//! into this form when a [`CallSite`] is built, so thresholds can be set for
//! a whole subtree (`app`), a module (`app/worker`) or a single function
//! (`app/worker.process`).
//!
//! The registry resolves a call site by trying its function path first and
//! then its package path followed by each ancestor directory. A
//! function-level match therefore wins even when a package-level threshold
//! would have decided otherwise, and among the remaining entries the most
//! specific one decides.
//!
//! # Invariants
//!
//! - Lookups never mutate the registry.
//! - Resolution is deterministic for a fixed registry state and path.
//! - Unattributed calls are never suppressed.
//!
//! # Errors
//!
//! Only configuration parsing fails: [`ParseLevelError`] for unknown level
//! names and [`DirectiveError`] for malformed `path=level` directives.
//!
//! # Examples
//!
//! ```
//! use logging::{CallSite, Level, LevelRegistry};
//!
//! let registry = LevelRegistry::new();
//! registry.set_path_level("app/worker", Level::Warn);
//! registry.set_path_level("app/worker.flush", Level::Debug);
//!
//! let process = CallSite::from_function_path("app/worker.process", "src/worker.rs", 12);
//! let flush = CallSite::from_function_path("app/worker.flush", "src/worker.rs", 40);
//!
//! assert!(registry.suppresses(Some(&process), Level::Info));
//! assert!(!registry.suppresses(Some(&flush), Level::Debug));
//! ```

mod call_site;
mod directives;
mod level;
pub mod path;
mod registry;

pub use call_site::CallSite;
pub use directives::{DirectiveError, LEVEL_ENV_VAR, LevelDirectives};
pub use level::{Level, ParseLevelError};
pub use registry::{LevelRegistry, Resolution};
