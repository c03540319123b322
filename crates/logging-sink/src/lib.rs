#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging-sink` owns the output side of the coloured logger: where each
//! tier's lines go, whether they carry a prefix, and how prefixes are styled.
//!
//! # Design
//!
//! [`MessageSink`] wraps a boxed [`std::io::Write`] implementor so the
//! destination can be swapped at runtime. [`TierOutputs`] keeps one sink per
//! [`logging::Level`] behind a single lock together with lock-free prefix
//! flags. [`MemorySink`] is a cloneable capture buffer for tests and for
//! programs that want to inspect their own output. The [`style`] module maps
//! tiers to [`anstyle`] colours.
//!
//! # Invariants
//!
//! - A rendered line reaches its writer through one `write_all` call made
//!   while the output lock is held.
//! - Every tier defaults to standard error with its prefix enabled.
//!
//! # Errors
//!
//! Write operations surface [`std::io::Error`] values from the underlying
//! writer unchanged.
//!
//! # Examples
//!
//! ```
//! use logging::Level;
//! use logging_sink::{MemorySink, TierOutputs};
//!
//! let outputs = TierOutputs::new();
//! let capture = MemorySink::new();
//! let _stderr = outputs.set_output(Level::Warn, capture.clone());
//! outputs.set_prefix(Level::Warn, false);
//!
//! outputs.write_line(Level::Warn, "disk almost full\n")?;
//! assert_eq!(capture.contents(), "disk almost full\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod memory;
mod sink;
pub mod style;

pub use memory::MemorySink;
pub use sink::{BoxedWriter, MessageSink, TierOutputs};
pub use style::ColorMode;
