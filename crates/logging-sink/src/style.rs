//! Prefix colours and colour-mode selection.

use std::env;
use std::fmt::Write as _;

use anstyle::{AnsiColor, Color, Style};
use logging::Level;

/// Environment variable that disables colour when set to a non-empty value.
pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";

/// Whether prefixes are rendered with ANSI escape sequences.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColorMode {
    /// Always emit ANSI styling.
    #[default]
    Always,
    /// Emit plain text.
    Never,
}

impl ColorMode {
    /// Selects [`ColorMode::Never`] when `NO_COLOR` is set to a non-empty
    /// value and [`ColorMode::Always`] otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_no_color(env::var_os(NO_COLOR_ENV_VAR).as_deref())
    }

    fn from_no_color(value: Option<&std::ffi::OsStr>) -> Self {
        match value {
            Some(value) if !value.is_empty() => Self::Never,
            _ => Self::Always,
        }
    }

    /// Reports whether ANSI styling is emitted.
    #[must_use]
    pub const fn enabled(self) -> bool {
        matches!(self, Self::Always)
    }
}

/// Returns the bold colour used for the package tag of `level`.
///
/// Debug is magenta, info is cyan, warn and error are red.
#[must_use]
pub fn tag_style(level: Level) -> Style {
    let color = match level {
        Level::Debug => AnsiColor::Magenta,
        Level::Info => AnsiColor::Cyan,
        Level::Warn | Level::Error => AnsiColor::Red,
    };
    Style::new().fg_color(Some(Color::Ansi(color))).bold()
}

/// Returns the bold white style used for the `file:line:` tag.
#[must_use]
pub fn location_style() -> Style {
    Style::new()
        .fg_color(Some(Color::Ansi(AnsiColor::White)))
        .bold()
}

/// Appends `text` to `out`, wrapped in `style` when `mode` enables colour.
pub fn paint_into(out: &mut String, text: &str, style: Style, mode: ColorMode) {
    if mode.enabled() {
        let _ = write!(out, "{}{text}{}", style.render(), style.render_reset());
    } else {
        out.push_str(text);
    }
}

/// Returns `text` wrapped in `style` when `mode` enables colour.
#[must_use]
pub fn paint(text: &str, style: Style, mode: ColorMode) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    paint_into(&mut out, text, style, mode);
    out
}
