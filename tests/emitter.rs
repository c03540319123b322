//! End-to-end behaviour of the emission macros against explicit loggers.

use std::sync::Arc;
use std::thread;

use clog::{ColorMode, Level, Logger, MemorySink};
use proptest::prelude::*;

mod app {
    pub mod worker {
        use clog::Logger;

        pub fn process_debug(logger: &Logger) {
            clog::debug!(logger: logger, "starting");
        }

        pub fn process_warn(logger: &Logger) {
            clog::warn!(logger: logger, "queue is full");
        }

        pub fn flush(logger: &Logger) {
            clog::debugln!(logger: logger, "flushed", 3, "items");
        }

        pub trait Task {
            fn go(&self, logger: &Logger);
        }

        pub struct Job;

        impl Job {
            pub fn start(&self, logger: &Logger) {
                clog::info!(logger: logger, "job started");
            }
        }

        impl Task for Job {
            fn go(&self, logger: &Logger) {
                clog::info!(logger: logger, "job");
            }
        }

        pub struct Pool<T>(pub T);

        impl<T> Pool<T> {
            pub fn run(&self, logger: &Logger) {
                clog::info!(logger: logger, "pool");
            }
        }

        impl<T> Task for Pool<T> {
            fn go(&self, logger: &Logger) {
                let each = || clog::info!(logger: logger, "pool task");
                each();
            }
        }
    }
}

fn capture_all(logger: &Logger) -> MemorySink {
    logger.set_color_mode(ColorMode::Never);
    let capture = MemorySink::new();
    for level in Level::ALL {
        let _ = logger.set_output(level, capture.clone());
    }
    capture
}

#[test]
fn package_threshold_suppresses_debug_and_tags_warn() {
    let logger = Logger::new();
    let capture = capture_all(&logger);
    logger.set_path_level("emitter/app/worker", Level::Warn);

    app::worker::process_debug(&logger);
    assert!(capture.is_empty(), "debug below the package threshold is dropped");

    app::worker::process_warn(&logger);
    let contents = capture.contents();
    assert!(contents.starts_with("worker: "), "got {contents:?}");
    assert!(contents.contains(&format!("{}:", file!())));
    assert!(contents.ends_with(": queue is full\n"));
}

#[test]
fn function_threshold_overrides_package_threshold() {
    let logger = Logger::new();
    let capture = capture_all(&logger);
    logger.set_path_level("emitter/app/worker", Level::Warn);
    logger.set_path_level("emitter/app/worker.flush", Level::Debug);

    app::worker::flush(&logger);
    app::worker::process_debug(&logger);

    assert_eq!(capture.contents(), "worker: flushed 3 items\n");
}

#[test]
fn function_threshold_wins_regardless_of_install_order() {
    let logger = Logger::new();
    let capture = capture_all(&logger);
    logger.set_path_level("emitter/app/worker.process_warn", Level::Error);
    logger.set_path_level("emitter/app/worker", Level::Debug);

    app::worker::process_warn(&logger);
    assert!(capture.is_empty());
}

#[test]
fn inherent_method_threshold_targets_type_and_method() {
    use app::worker::Task;

    let logger = Logger::new();
    let capture = capture_all(&logger);
    logger.set_path_level("emitter/app/worker.Job.start", Level::Warn);

    app::worker::Job.start(&logger);
    assert!(capture.is_empty());

    app::worker::Job.go(&logger);
    assert_eq!(capture.contents(), "worker: job\n");
}

#[test]
fn generic_method_threshold_ignores_type_arguments() {
    let logger = Logger::new();
    let capture = capture_all(&logger);
    logger.set_path_level("emitter/app/worker.Pool.run", Level::Warn);

    app::worker::Pool(1_u8).run(&logger);
    app::worker::Pool("two").run(&logger);
    assert!(capture.is_empty(), "got {:?}", capture.contents());

    app::worker::process_warn(&logger);
    assert!(capture.contents().ends_with(": queue is full\n"));
}

#[test]
fn trait_impls_are_targeted_by_implementing_type() {
    use app::worker::Task;

    let logger = Logger::new();
    let capture = capture_all(&logger);
    logger.set_path_level("emitter/app/worker.Job.go", Level::Error);

    app::worker::Job.go(&logger);
    assert!(capture.is_empty(), "got {:?}", capture.contents());

    app::worker::Pool(()).go(&logger);
    assert_eq!(capture.contents(), "worker: pool task\n");
}

#[test]
fn generic_trait_impl_threshold_covers_closures() {
    use app::worker::Task;

    let logger = Logger::new();
    let capture = capture_all(&logger);
    logger.set_path_level("emitter/app/worker", Level::Error);
    logger.set_path_level("emitter/app/worker.Pool.go", Level::Info);

    app::worker::Pool(0_i64).go(&logger);
    app::worker::Job.go(&logger);
    assert_eq!(capture.contents(), "worker: pool task\n");
}

#[test]
fn ancestor_threshold_applies_to_descendants() {
    let logger = Logger::new();
    let capture = capture_all(&logger);
    logger.set_path_level("emitter/app", Level::Info);

    app::worker::process_debug(&logger);
    assert!(capture.is_empty());
}

#[test]
fn template_without_overrides_renders_package_prefix() {
    let logger = Logger::new();
    let capture = capture_all(&logger);

    clog::infof!(logger: &logger, "count={}", 5);
    assert_eq!(capture.contents(), "emitter: count=5\n");
}

#[test]
fn conventions_render_bodies_differently() {
    let logger = Logger::new();
    let capture = capture_all(&logger);
    for level in Level::ALL {
        logger.set_prefix(level, false);
    }

    clog::info!(logger: &logger, "a", 1, 'c');
    clog::infoln!(logger: &logger, "a", 1, 'c');
    clog::infof!(logger: &logger, "{}-{}-{}", "a", 1, 'c');
    clog::info!(logger: &logger);

    assert_eq!(capture.contents(), "a1c\na 1 c\na-1-c\n\n");
}

#[test]
fn warn_tag_reports_the_invocation_line() {
    let logger = Logger::new();
    let capture = capture_all(&logger);

    let expected = line!() + 1;
    clog::warnf!(logger: &logger, "here");

    assert_eq!(
        capture.contents(),
        format!("emitter: {}:{expected}: here\n", file!())
    );
}

#[test]
fn call_inside_closure_is_attributed_to_enclosing_function() {
    let logger = Logger::new();
    let capture = capture_all(&logger);
    logger.set_path_level(
        "emitter.call_inside_closure_is_attributed_to_enclosing_function",
        Level::Warn,
    );

    let log = || clog::info!(logger: &logger, "hidden");
    log();
    assert!(capture.is_empty());
}

#[test]
fn disabled_prefix_omits_tags() {
    let logger = Logger::new();
    let capture = capture_all(&logger);
    logger.set_prefix(Level::Warn, false);

    clog::warnln!(logger: &logger, "plain");
    assert_eq!(capture.contents(), "plain\n");
}

#[test]
fn main_prefix_name_does_not_apply_outside_entry_modules() {
    let logger = Logger::new();
    let capture = capture_all(&logger);
    logger.set_main_prefix_name("tool");

    // Integration tests live in `tests/`, not a binary entry point.
    clog::info!(logger: &logger, "x");
    assert_eq!(capture.contents(), "emitter: x\n");
}

#[test]
fn tiers_use_independent_outputs() {
    let logger = Logger::new();
    logger.set_color_mode(ColorMode::Never);
    let info = MemorySink::new();
    let warn = MemorySink::new();
    let _ = logger.set_output(Level::Info, info.clone());
    let _ = logger.set_output(Level::Warn, warn.clone());

    clog::info!(logger: &logger, "i");
    clog::warn!(logger: &logger, "w");

    assert_eq!(info.contents(), "emitter: i\n");
    assert!(warn.contents().ends_with(": w\n"));
}

#[test]
fn concurrent_callers_never_tear_lines() {
    let logger = Arc::new(Logger::new());
    let capture = capture_all(&logger);

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let body = format!("{worker}").repeat(40);
                for _ in 0..100 {
                    if worker % 2 == 0 {
                        clog::infoln!(logger: &logger, body);
                    } else {
                        clog::warnln!(logger: &logger, body);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let contents = capture.contents();
    assert_eq!(contents.lines().count(), 800);
    for line in contents.lines() {
        let body = line.rsplit(' ').next().expect("line has a body");
        assert!(line.starts_with("emitter: "), "torn prefix in {line:?}");
        assert_eq!(body.len(), 40, "torn body in {line:?}");
        let first = body.chars().next().expect("non-empty body");
        assert!(body.chars().all(|c| c == first), "mixed body in {line:?}");
    }
}

fn level_strategy() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

proptest! {
    #[test]
    fn write_happens_exactly_when_threshold_permits(
        threshold in level_strategy(),
        level in level_strategy(),
    ) {
        let logger = Logger::new();
        let capture = capture_all(&logger);
        logger.set_path_level("emitter/app/worker", threshold);

        let written = logger.log(
            level,
            Some(&clog::CallSite::from_function_path("emitter/app/worker.process", "src/w.rs", 1)),
            clog::Body::Print(&[&"m"]),
        );

        prop_assert_eq!(written, threshold <= level);
        prop_assert_eq!(capture.contents().lines().count(), usize::from(threshold <= level));
    }
}
