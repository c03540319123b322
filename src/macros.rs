//! The twelve emission macros: three calling conventions per tier.
//!
//! Every macro captures its [`CallSite`](crate::CallSite) where it is
//! expanded, so attribution always names the function containing the
//! invocation. A leading `logger: <expr>,` argument targets an explicit
//! [`Logger`](crate::Logger) instead of the process-wide default.

#[doc(hidden)]
#[macro_export]
macro_rules! __clog_values {
    ($logger:expr, $level:expr, $body:ident $(, $arg:expr)*) => {{
        let __clog_site = $crate::call_site!();
        $crate::Logger::emit(
            $logger,
            $level,
            ::std::option::Option::Some(&__clog_site),
            $crate::Body::$body(&[$(&$arg as &dyn ::std::fmt::Display),*]),
        )
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __clog_format {
    ($logger:expr, $level:expr, $($fmt:tt)+) => {{
        let __clog_site = $crate::call_site!();
        $crate::Logger::emit(
            $logger,
            $level,
            ::std::option::Option::Some(&__clog_site),
            $crate::Body::Format(::std::format_args!($($fmt)+)),
        )
    }};
}

/// Logs the concatenated values at debug level.
///
/// ```
/// let logger = clog::Logger::new();
/// let capture = clog::MemorySink::new();
/// let _ = logger.set_output(clog::Level::Debug, capture.clone());
/// logger.set_prefix(clog::Level::Debug, false);
///
/// clog::debug!(logger: &logger, "retries=", 3);
/// assert_eq!(capture.contents(), "retries=3\n");
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__clog_values!($logger, $crate::Level::Debug, Print $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__clog_values!($crate::logger(), $crate::Level::Debug, Print $(, $arg)*)
    };
}

/// Logs a `format_args!` template at debug level.
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($fmt:tt)+) => {
        $crate::__clog_format!($logger, $crate::Level::Debug, $($fmt)+)
    };
    ($($fmt:tt)+) => {
        $crate::__clog_format!($crate::logger(), $crate::Level::Debug, $($fmt)+)
    };
}

/// Logs the space-separated values at debug level.
#[macro_export]
macro_rules! debugln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__clog_values!($logger, $crate::Level::Debug, Line $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__clog_values!($crate::logger(), $crate::Level::Debug, Line $(, $arg)*)
    };
}

/// Logs the concatenated values at info level.
#[macro_export]
macro_rules! info {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__clog_values!($logger, $crate::Level::Info, Print $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__clog_values!($crate::logger(), $crate::Level::Info, Print $(, $arg)*)
    };
}

/// Logs a `format_args!` template at info level.
///
/// ```
/// let logger = clog::Logger::new();
/// logger.set_color_mode(clog::ColorMode::Never);
/// let capture = clog::MemorySink::new();
/// let _ = logger.set_output(clog::Level::Info, capture.clone());
///
/// let count = 5;
/// clog::infof!(logger: &logger, "count={count}");
/// assert!(capture.contents().ends_with(": count=5\n"));
/// ```
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($fmt:tt)+) => {
        $crate::__clog_format!($logger, $crate::Level::Info, $($fmt)+)
    };
    ($($fmt:tt)+) => {
        $crate::__clog_format!($crate::logger(), $crate::Level::Info, $($fmt)+)
    };
}

/// Logs the space-separated values at info level.
#[macro_export]
macro_rules! infoln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__clog_values!($logger, $crate::Level::Info, Line $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__clog_values!($crate::logger(), $crate::Level::Info, Line $(, $arg)*)
    };
}

/// Logs the concatenated values at warn level, with a `file:line:` tag.
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__clog_values!($logger, $crate::Level::Warn, Print $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__clog_values!($crate::logger(), $crate::Level::Warn, Print $(, $arg)*)
    };
}

/// Logs a `format_args!` template at warn level, with a `file:line:` tag.
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr, $($fmt:tt)+) => {
        $crate::__clog_format!($logger, $crate::Level::Warn, $($fmt)+)
    };
    ($($fmt:tt)+) => {
        $crate::__clog_format!($crate::logger(), $crate::Level::Warn, $($fmt)+)
    };
}

/// Logs the space-separated values at warn level, with a `file:line:` tag.
#[macro_export]
macro_rules! warnln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__clog_values!($logger, $crate::Level::Warn, Line $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__clog_values!($crate::logger(), $crate::Level::Warn, Line $(, $arg)*)
    };
}

/// Logs the concatenated values at error level, then exits with status 1.
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__clog_values!($logger, $crate::Level::Error, Print $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__clog_values!($crate::logger(), $crate::Level::Error, Print $(, $arg)*)
    };
}

/// Logs a `format_args!` template at error level, then exits with status 1.
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($fmt:tt)+) => {
        $crate::__clog_format!($logger, $crate::Level::Error, $($fmt)+)
    };
    ($($fmt:tt)+) => {
        $crate::__clog_format!($crate::logger(), $crate::Level::Error, $($fmt)+)
    };
}

/// Logs the space-separated values at error level, then exits with status 1.
#[macro_export]
macro_rules! fatalln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__clog_values!($logger, $crate::Level::Error, Line $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::__clog_values!($crate::logger(), $crate::Level::Error, Line $(, $arg)*)
    };
}
