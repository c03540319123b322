#![deny(unsafe_code)]

//! Emits one log line through the process-wide logger.
//!
//! Used by the integration tests to observe behaviour that cannot be checked
//! in-process, such as the fatal tier's exit status and `CLOG_LEVEL`.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use clog::{ColorMode, Level};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Convention {
    /// Values concatenated with no separator.
    Print,
    /// `format_args!` template.
    Format,
    /// Values joined by spaces.
    Line,
}

#[derive(Debug, Parser)]
#[command(name = "clog-demo", version, about = "Emit a log line through clog")]
struct Args {
    /// Tier to log at: debug, info, warn or error.
    #[arg(long, default_value = "info")]
    tier: Level,

    /// Calling convention to use.
    #[arg(long, value_enum, default_value_t = Convention::Format)]
    convention: Convention,

    /// Comma-separated `path=level` thresholds applied after `CLOG_LEVEL`.
    #[arg(long = "path-level", value_name = "DIRECTIVES")]
    path_level: Option<String>,

    /// Name shown instead of the crate name for this binary's entry module.
    #[arg(long = "main-prefix-name", value_name = "NAME")]
    main_prefix_name: Option<String>,

    /// Write the line without its prefix.
    #[arg(long)]
    no_prefix: bool,

    /// Colour the prefix even when NO_COLOR is set.
    #[arg(long)]
    color: bool,

    /// Log from the `worker` module instead of the entry module.
    #[arg(long)]
    from_worker: bool,

    /// Count included in the message.
    #[arg(long, default_value_t = 5)]
    count: u32,

    /// Message text.
    #[arg(default_value = "count")]
    message: String,
}

/// Expands to the macro call for `tier` and `convention` at the invocation
/// site, so the line is attributed to the enclosing function.
macro_rules! dispatch {
    ($tier:expr, $convention:expr, $message:expr, $count:expr) => {{
        let message = $message;
        let count = $count;
        match ($tier, $convention) {
            (Level::Debug, Convention::Print) => clog::debug!(message, count),
            (Level::Debug, Convention::Format) => clog::debugf!("{message}={count}"),
            (Level::Debug, Convention::Line) => clog::debugln!(message, count),
            (Level::Info, Convention::Print) => clog::info!(message, count),
            (Level::Info, Convention::Format) => clog::infof!("{message}={count}"),
            (Level::Info, Convention::Line) => clog::infoln!(message, count),
            (Level::Warn, Convention::Print) => clog::warn!(message, count),
            (Level::Warn, Convention::Format) => clog::warnf!("{message}={count}"),
            (Level::Warn, Convention::Line) => clog::warnln!(message, count),
            (Level::Error, Convention::Print) => clog::fatal!(message, count),
            (Level::Error, Convention::Format) => clog::fatalf!("{message}={count}"),
            (Level::Error, Convention::Line) => clog::fatalln!(message, count),
        }
    }};
}

mod worker {
    use super::Convention;
    use clog::Level;

    pub(super) fn process(tier: Level, convention: Convention, message: &str, count: u32) {
        dispatch!(tier, convention, message, count);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = clog::init_from_env() {
        eprintln!("clog-demo: invalid {}: {error}", clog::LEVEL_ENV_VAR);
        return ExitCode::from(2);
    }
    if let Some(directives) = &args.path_level {
        if let Err(error) = clog::apply_directives(directives) {
            eprintln!("clog-demo: invalid --path-level: {error}");
            return ExitCode::from(2);
        }
    }
    if let Some(name) = args.main_prefix_name {
        clog::set_main_prefix_name(name);
    }
    if args.no_prefix {
        for level in Level::ALL {
            clog::logger().set_prefix(level, false);
        }
    }
    if args.color {
        clog::set_color_mode(ColorMode::Always);
    }

    if args.from_worker {
        worker::process(args.tier, args.convention, &args.message, args.count);
    } else {
        dispatch!(args.tier, args.convention, args.message.as_str(), args.count);
    }
    ExitCode::SUCCESS
}
