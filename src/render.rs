//! Prefix and body rendering for a single log line.

use std::fmt::{self, Write as _};

use logging::{CallSite, Level};
use logging_sink::ColorMode;
use logging_sink::style::{location_style, paint_into, tag_style};

/// Message body of one log call, one variant per calling convention.
#[derive(Clone, Copy)]
pub enum Body<'a> {
    /// Values concatenated with no separator (`debug!(a, b)`).
    Print(&'a [&'a dyn fmt::Display]),
    /// Template substitution (`debugf!("count={}", n)`).
    Format(fmt::Arguments<'a>),
    /// Values joined by single spaces (`debugln!(a, b)`).
    Line(&'a [&'a dyn fmt::Display]),
}

impl Body<'_> {
    /// Appends the body to `out`, terminated by exactly one newline.
    pub fn write_into(&self, out: &mut String) {
        let _ = match self {
            Self::Print(values) => values.iter().try_for_each(|value| write!(out, "{value}")),
            Self::Format(arguments) => out.write_fmt(*arguments),
            Self::Line(values) => values.iter().enumerate().try_for_each(|(index, value)| {
                if index > 0 {
                    out.push(' ');
                }
                write!(out, "{value}")
            }),
        };
        out.push('\n');
    }

    /// Renders the body into a fresh string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }
}

impl fmt::Debug for Body<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Print(_) => "Print",
            Self::Format(_) => "Format",
            Self::Line(_) => "Line",
        };
        f.debug_tuple(kind).field(&self.render().trim_end()).finish()
    }
}

/// Prefix settings resolved for one call.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PrefixParts<'a> {
    pub(crate) display_name: &'a str,
    pub(crate) colors: ColorMode,
}

/// Appends the `"<name>: "` tag and, for warn and error, the `"<file>:<line>: "`
/// tag.
pub(crate) fn write_prefix(out: &mut String, level: Level, site: &CallSite, parts: PrefixParts<'_>) {
    let tag = format!("{}:", parts.display_name);
    paint_into(out, &tag, tag_style(level), parts.colors);
    out.push(' ');

    if level.shows_location() {
        let location = format!("{site}:");
        paint_into(out, &location, location_style(), parts.colors);
        out.push(' ');
    }
}

/// Renders a complete line: optional prefix, body and trailing newline.
pub(crate) fn render_line(
    level: Level,
    site: Option<&CallSite>,
    prefix: Option<PrefixParts<'_>>,
    body: &Body<'_>,
) -> String {
    let mut line = String::with_capacity(64);
    if let (Some(site), Some(parts)) = (site, prefix) {
        write_prefix(&mut line, level, site, parts);
    }
    body.write_into(&mut line);
    line
}
