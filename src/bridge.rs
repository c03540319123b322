//! Bridge from the `tracing` ecosystem into the coloured emitter.
//!
//! [`ClogLayer`] is a `tracing-subscriber` layer that turns each event into a
//! log line. The event's module path takes the place of the captured call
//! site, so path thresholds apply to `tracing` events exactly as they do to
//! the emission macros.
//!
//! ```rust,ignore
//! clog::set_path_level("app/db", clog::Level::Warn);
//! clog::init_tracing();
//!
//! tracing::info!("connected"); // suppressed when emitted from app::db
//! ```

use std::fmt;
use std::ops::Deref;

use logging::path::package_path_from_module;
use logging::{CallSite, Level};
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::logger::Logger;
use crate::render::Body;

/// A tracing layer that writes events through a [`Logger`].
///
/// Events never terminate the process: `ERROR` events are written to the warn
/// tier.
pub struct ClogLayer<L = &'static Logger> {
    logger: L,
}

impl ClogLayer {
    /// Creates a layer that writes through the process-wide logger.
    #[must_use]
    pub fn new() -> Self {
        Self::with_logger(crate::logger())
    }
}

impl Default for ClogLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> ClogLayer<L>
where
    L: Deref<Target = Logger>,
{
    /// Creates a layer that writes through `logger`.
    pub const fn with_logger(logger: L) -> Self {
        Self { logger }
    }

    /// Maps a tracing level to the tier its events are written to.
    const fn tier(level: tracing::Level) -> Level {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN | tracing::Level::ERROR => Level::Warn,
        }
    }
}

impl<L> fmt::Debug for ClogLayer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClogLayer").finish_non_exhaustive()
    }
}

impl<S, L> Layer<S> for ClogLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Deref<Target = Logger> + Send + Sync + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let tier = Self::tier(*metadata.level());

        let site = metadata.module_path().map(|module| {
            CallSite::from_function_path(
                package_path_from_module(module),
                metadata.file().unwrap_or("<unknown>"),
                metadata.line().unwrap_or(0),
            )
        });
        if !self.logger.enabled(tier, site.as_ref()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.finish();
        self.logger.log(tier, site.as_ref(), Body::Print(&[&message]));
    }
}

/// Collects the `message` field followed by any other fields as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let mut out = self.message;
        for field in self.fields {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&field);
        }
        out
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Installs a global subscriber that routes `tracing` events through the
/// process-wide logger.
///
/// Panics if a global subscriber is already installed, as
/// `tracing_subscriber`'s `init` does.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(ClogLayer::new()).init();
}
