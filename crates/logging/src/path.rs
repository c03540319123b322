//! crates/logging/src/path.rs
//! Hierarchical path helpers.
//!
//! Paths use `/` between package segments and `.` between the package path
//! and a function suffix, e.g. `app/worker.process` or
//! `app/worker.Pool.run`. Rust module paths (`app::worker`) are converted
//! into this form by [`package_path_from_module`] and
//! [`function_path_from_parts`].

use std::iter::FusedIterator;

const PLACEHOLDER_PREFIX: &str = "{{";

/// Returns the package path of a path-qualified function name.
///
/// # Examples
///
/// ```
/// use logging::path::package_path;
///
/// assert_eq!(package_path("app/worker.process"), "app/worker");
/// assert_eq!(package_path("app/worker.Pool.run"), "app/worker");
/// assert_eq!(package_path("main.main"), "main");
/// assert_eq!(package_path("app/worker"), "app/worker");
/// ```
#[must_use]
pub fn package_path(function_path: &str) -> &str {
    let start = function_path.rfind('/').map_or(0, |pos| pos + 1);
    match function_path[start..].find('.') {
        Some(dot) => &function_path[..start + dot],
        None => function_path,
    }
}

/// Returns the package name (last package segment) of a path-qualified
/// function name.
///
/// ```
/// use logging::path::package_name;
///
/// assert_eq!(package_name("app/worker.process"), "worker");
/// assert_eq!(package_name("main.main"), "main");
/// ```
#[must_use]
pub fn package_name(function_path: &str) -> &str {
    let last = function_path
        .rfind('/')
        .map_or(function_path, |pos| &function_path[pos + 1..]);
    last.find('.').map_or(last, |dot| &last[..dot])
}

/// Returns the function suffix of a path-qualified function name, or an
/// empty string when the path names a package.
///
/// ```
/// use logging::path::function_name;
///
/// assert_eq!(function_name("app/worker.process"), "process");
/// assert_eq!(function_name("app/worker.Pool.run"), "Pool.run");
/// assert_eq!(function_name("app/worker"), "");
/// ```
#[must_use]
pub fn function_name(function_path: &str) -> &str {
    let last = function_path
        .rfind('/')
        .map_or(function_path, |pos| &function_path[pos + 1..]);
    last.find('.').map_or("", |dot| &last[dot + 1..])
}

/// Returns the parent of `path` by removing its last `/`-delimited segment.
///
/// A function suffix belongs to the last segment, so the parent of
/// `a/b/pkg.Func` is `a/b`, not `a/b/pkg`.
#[must_use]
pub fn parent(path: &str) -> Option<&str> {
    path.rfind('/').map(|pos| &path[..pos])
}

/// Iterates over `path` followed by each of its ancestors.
///
/// ```
/// use logging::path::ancestors;
///
/// let visited: Vec<_> = ancestors("a/b/pkg.Func").collect();
/// assert_eq!(visited, ["a/b/pkg.Func", "a/b", "a"]);
/// ```
pub fn ancestors(path: &str) -> Ancestors<'_> {
    Ancestors { next: Some(path) }
}

/// Iterator returned by [`ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = parent(current);
        Some(current)
    }
}

impl FusedIterator for Ancestors<'_> {}

/// Converts a Rust module path (`app::worker`) into a package path
/// (`app/worker`).
#[must_use]
pub fn package_path_from_module(module_path: &str) -> String {
    module_path.replace("::", "/")
}

/// Builds the path-qualified function name for a call site.
///
/// `module_path` is the value of `module_path!()` at the call site and
/// `type_path` the fully qualified name of the enclosing function as reported
/// by [`std::any::type_name`]. Closure and other compiler placeholder
/// segments are dropped so the call is attributed to the enclosing named
/// function, and generic arguments are removed from type segments. Trait
/// implementations render as `<Type as Trait>::method`; they are named after
/// the last segment of the implementing type.
///
/// ```
/// use logging::path::function_path_from_parts;
///
/// assert_eq!(
///     function_path_from_parts("app::worker", "app::worker::process"),
///     "app/worker.process"
/// );
/// assert_eq!(
///     function_path_from_parts("app::worker", "app::worker::Pool<_>::run::{{closure}}"),
///     "app/worker.Pool.run"
/// );
/// assert_eq!(
///     function_path_from_parts("app", "<app::Job as app::Task>::run"),
///     "app.Job.run"
/// );
/// ```
#[must_use]
pub fn function_path_from_parts(module_path: &str, type_path: &str) -> String {
    let package = package_path_from_module(module_path);

    let relative = type_path
        .strip_prefix(module_path)
        .and_then(|rest| rest.strip_prefix("::"));

    let suffix: Vec<&str> = if let Some(rest) = relative {
        named_segments(rest).collect()
    } else if let Some((self_type, rest)) = split_qualified_self(type_path) {
        let type_name = split_segments(self_type)
            .into_iter()
            .rev()
            .map(strip_generics)
            .find(|segment| is_named(segment));
        type_name.into_iter().chain(named_segments(rest)).collect()
    } else {
        named_segments(type_path).last().into_iter().collect()
    };

    if suffix.is_empty() {
        package
    } else {
        format!("{package}.{}", suffix.join("."))
    }
}

fn is_named(segment: &str) -> bool {
    !segment.is_empty() && !segment.starts_with(PLACEHOLDER_PREFIX) && !segment.starts_with('<')
}

/// Removes generic arguments (`Pool<_>` becomes `Pool`).
fn strip_generics(segment: &str) -> &str {
    match segment.find('<') {
        Some(0) | None => segment,
        Some(open) => &segment[..open],
    }
}

fn named_segments(path: &str) -> impl Iterator<Item = &str> {
    split_segments(path)
        .into_iter()
        .map(strip_generics)
        .filter(|segment| is_named(segment))
}

/// Splits `<Type as Trait>::rest` into the implementing type and `rest`.
///
/// Reference and `mut` qualifiers on the type are dropped. Returns `None`
/// when `path` does not start with a qualified self type.
fn split_qualified_self(path: &str) -> Option<(&str, &str)> {
    if !path.starts_with('<') {
        return None;
    }
    let inner_start = 1;
    let bytes = path.as_bytes();
    let mut depth = 1usize;
    let mut as_at = None;
    let mut index = inner_start;

    while index < bytes.len() {
        match bytes[index] {
            b'<' => depth += 1,
            // `->` in function pointer types does not close a bracket.
            b'>' if bytes[index - 1] == b'-' => {}
            b'>' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            b' ' if depth == 1 && as_at.is_none() && path[index..].starts_with(" as ") => {
                as_at = Some(index);
            }
            _ => {}
        }
        index += 1;
    }
    if depth != 0 {
        return None;
    }

    let self_type = path[inner_start..as_at.unwrap_or(index)]
        .trim_start_matches('&')
        .trim_start_matches("mut ")
        .trim();
    let rest = path[index + 1..].strip_prefix("::").unwrap_or_default();
    Some((self_type, rest))
}

/// Splits a Rust path on `::` separators that are not nested inside generic
/// brackets.
fn split_segments(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(index + 1) == Some(&b':') => {
                segments.push(&path[start..index]);
                index += 2;
                start = index;
                continue;
            }
            _ => {}
        }
        index += 1;
    }
    segments.push(&path[start..]);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_path_strips_function_suffix() {
        assert_eq!(package_path("example.com/team/clog.Debugf"), "example.com/team/clog");
        assert_eq!(package_path("a/b.c/pkg.Func"), "a/b.c/pkg");
        assert_eq!(package_path(""), "");
    }

    #[test]
    fn package_name_ignores_dots_in_ancestors() {
        assert_eq!(package_name("example.com/team/clog.getPrefix"), "clog");
        assert_eq!(package_name("worker"), "worker");
    }

    #[test]
    fn parent_removes_last_segment() {
        assert_eq!(parent("a/b/c"), Some("a/b"));
        assert_eq!(parent("a/b/pkg.Func"), Some("a/b"));
        assert_eq!(parent("a"), None);
        assert_eq!(parent(""), None);
    }

    #[test]
    fn ancestors_stop_at_root() {
        let visited: Vec<_> = ancestors("app").collect();
        assert_eq!(visited, ["app"]);

        let mut iter = ancestors("x/y");
        assert_eq!(iter.next(), Some("x/y"));
        assert_eq!(iter.next(), Some("x"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn module_paths_become_slash_delimited() {
        assert_eq!(package_path_from_module("app"), "app");
        assert_eq!(package_path_from_module("app::worker::pool"), "app/worker/pool");
    }

    #[test]
    fn function_path_drops_nested_closures() {
        assert_eq!(
            function_path_from_parts("app", "app::main::{{closure}}::{{closure}}"),
            "app.main"
        );
    }

    #[test]
    fn function_path_strips_generic_arguments() {
        assert_eq!(
            function_path_from_parts("app::store", "app::store::Cache<_>::get"),
            "app/store.Cache.get"
        );
        assert_eq!(
            function_path_from_parts("app::store", "app::store::Cache<_, _>::get::{{closure}}"),
            "app/store.Cache.get"
        );
    }

    #[test]
    fn trait_impls_are_named_after_the_implementing_type() {
        assert_eq!(
            function_path_from_parts("app::worker", "<app::worker::Job as app::worker::Task>::go"),
            "app/worker.Job.go"
        );
        assert_eq!(
            function_path_from_parts(
                "app::worker",
                "<app::worker::Pool<_> as app::worker::Task>::go::{{closure}}"
            ),
            "app/worker.Pool.go"
        );
        assert_eq!(
            function_path_from_parts(
                "app::worker",
                "<alloc::vec::Vec<app::worker::Job> as core::fmt::Display>::fmt"
            ),
            "app/worker.Vec.fmt"
        );
        assert_eq!(
            function_path_from_parts("app", "<&mut app::Job as app::Task>::go"),
            "app.Job.go"
        );
    }

    #[test]
    fn qualified_self_parsing() {
        assert_eq!(
            split_qualified_self("<a::B<fn() -> u8> as a::T>::m"),
            Some(("a::B<fn() -> u8>", "m"))
        );
        assert_eq!(split_qualified_self("<a::B>::m"), Some(("a::B", "m")));
        assert_eq!(split_qualified_self("a::b::m"), None);
        assert_eq!(split_qualified_self("<a::B as T"), None);
    }

    #[test]
    fn function_path_without_named_suffix_is_package() {
        assert_eq!(function_path_from_parts("app::init", "app::init::{{closure}}"), "app/init");
    }

    #[test]
    fn nested_functions_keep_their_outer_function() {
        assert_eq!(
            function_path_from_parts("app", "app::run::helper"),
            "app.run.helper"
        );
        assert_eq!(package_path("app.run.helper"), "app");
    }

    #[test]
    fn split_segments_respects_brackets() {
        assert_eq!(
            split_segments("<a::B as c::D>::run"),
            vec!["<a::B as c::D>", "run"]
        );
    }
}
