//! crates/logging/src/call_site.rs
//! Call-site descriptors captured at macro expansion sites.

use std::fmt;
use std::path::Path;

use crate::path::{function_name, function_path_from_parts, package_name, package_path};

/// Identity of the code that issued a log call.
///
/// A call site is computed fresh for every invocation by [`call_site!`]; it
/// carries the path-qualified function name (`app/worker.process`), the
/// package path and name derived from it, and the source file and line.
///
/// # Examples
///
/// ```
/// use logging::CallSite;
///
/// let site = CallSite::new("app::worker", "app::worker::process", "src/worker.rs", 42);
/// assert_eq!(site.function_path(), "app/worker.process");
/// assert_eq!(site.package_path(), "app/worker");
/// assert_eq!(site.package_name(), "worker");
/// assert_eq!(site.function_name(), "process");
/// assert_eq!(site.to_string(), "src/worker.rs:42");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallSite {
    function_path: String,
    package_len: usize,
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Builds a call site from the raw values captured at the expansion site.
    ///
    /// `type_path` is the [`std::any::type_name`] of the enclosing function as
    /// produced by [`function_path!`].
    #[must_use]
    pub fn new(module_path: &str, type_path: &str, file: &'static str, line: u32) -> Self {
        Self::from_function_path(function_path_from_parts(module_path, type_path), file, line)
    }

    /// Builds a call site from an already path-qualified function name such as
    /// `app/worker.process`.
    #[must_use]
    pub fn from_function_path(function_path: impl Into<String>, file: &'static str, line: u32) -> Self {
        let function_path = function_path.into();
        let package_len = package_path(&function_path).len();
        Self {
            function_path,
            package_len,
            file,
            line,
        }
    }

    /// Returns the path-qualified function name (`app/worker.process`).
    #[must_use]
    pub fn function_path(&self) -> &str {
        &self.function_path
    }

    /// Returns the package path (`app/worker`).
    #[must_use]
    pub fn package_path(&self) -> &str {
        &self.function_path[..self.package_len]
    }

    /// Returns the package name (`worker`).
    #[must_use]
    pub fn package_name(&self) -> &str {
        package_name(&self.function_path)
    }

    /// Returns the function suffix (`process`, or `Pool.run` for methods).
    #[must_use]
    pub fn function_name(&self) -> &str {
        function_name(&self.function_path)
    }

    /// Returns the source file recorded by `file!()`.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the source line recorded by `line!()`.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Reports whether the call site lives in a program's entry module.
    ///
    /// The entry module is a crate root (a package path without `/`) whose
    /// source file is a binary entry point: `main.rs`, or a file directly
    /// inside a `bin` or `examples` directory.
    #[must_use]
    pub fn is_entry_module(&self) -> bool {
        if self.package_path().contains('/') {
            return false;
        }
        let file = Path::new(self.file);
        if file.file_name().is_some_and(|name| name == "main.rs") {
            return true;
        }
        file.parent()
            .and_then(Path::file_name)
            .is_some_and(|dir| dir == "bin" || dir == "examples")
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Expands to the [`std::any::type_name`] of the enclosing function.
///
/// The returned string still uses Rust's `::` separators and may contain
/// `{{closure}}` segments; [`CallSite::new`] normalises it.
#[macro_export]
macro_rules! function_path {
    () => {{
        fn __clog_marker() {}
        fn __clog_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __clog_type_name_of(__clog_marker);
        name.strip_suffix("::__clog_marker").unwrap_or(name)
    }};
}

/// Captures the [`CallSite`] of the macro invocation.
///
/// # Examples
///
/// ```
/// let site = logging::call_site!();
/// assert!(site.file().ends_with(".rs"));
/// assert!(site.line() > 0);
/// assert!(!site.package_name().is_empty());
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::std::module_path!(),
            $crate::function_path!(),
            ::std::file!(),
            ::std::line!(),
        )
    };
}
