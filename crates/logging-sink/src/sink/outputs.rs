use std::array;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use logging::Level;

use super::message_sink::{BoxedWriter, MessageSink};

/// Per-tier output configuration: one [`MessageSink`] and one prefix flag for
/// each [`Level`].
///
/// All four sinks sit behind a single lock, so a line written to any tier is
/// never interleaved with another call's output even when several tiers share
/// one destination. The lock is held only for the write itself.
///
/// # Examples
///
/// ```
/// use logging::Level;
/// use logging_sink::{MemorySink, TierOutputs};
///
/// let outputs = TierOutputs::new();
/// let capture = MemorySink::new();
/// let _stderr = outputs.set_output(Level::Info, capture.clone());
///
/// outputs.write_line(Level::Info, "ready\n")?;
/// assert_eq!(capture.contents(), "ready\n");
/// assert!(outputs.uses_prefix(Level::Info));
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct TierOutputs {
    sinks: Mutex<[MessageSink; 4]>,
    prefixes: [AtomicBool; 4],
}

impl TierOutputs {
    /// Creates outputs that write every tier to standard error with prefixes
    /// enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: Mutex::new(array::from_fn(|_| MessageSink::stderr())),
            prefixes: array::from_fn(|_| AtomicBool::new(true)),
        }
    }

    /// Sets the destination of `level`'s messages, returning the previous
    /// writer.
    pub fn set_output<W>(&self, level: Level, writer: W) -> BoxedWriter
    where
        W: Write + Send + 'static,
    {
        self.set_boxed_output(level, Box::new(writer))
    }

    /// Boxed counterpart of [`set_output`](Self::set_output).
    pub fn set_boxed_output(&self, level: Level, writer: BoxedWriter) -> BoxedWriter {
        self.lock()[level.index()].replace_writer(writer)
    }

    /// Enables or disables the rendered prefix for `level`.
    pub fn set_prefix(&self, level: Level, use_prefix: bool) {
        self.prefixes[level.index()].store(use_prefix, Ordering::Relaxed);
    }

    /// Reports whether `level`'s messages carry a prefix.
    #[must_use]
    pub fn uses_prefix(&self, level: Level) -> bool {
        self.prefixes[level.index()].load(Ordering::Relaxed)
    }

    /// Writes one rendered line to `level`'s sink.
    pub fn write_line(&self, level: Level, line: &str) -> io::Result<()> {
        self.lock()[level.index()].write_line(line)
    }

    /// Flushes every sink, returning the first error encountered.
    pub fn flush_all(&self) -> io::Result<()> {
        let mut sinks = self.lock();
        let mut first_error = None;
        for sink in sinks.iter_mut() {
            if let Err(error) = sink.flush() {
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn lock(&self) -> MutexGuard<'_, [MessageSink; 4]> {
        // A panicking writer leaves the sink table itself intact.
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TierOutputs {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TierOutputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefixes: Vec<(Level, bool)> = Level::ALL
            .iter()
            .map(|level| (*level, self.uses_prefix(*level)))
            .collect();
        f.debug_struct("TierOutputs")
            .field("prefixes", &prefixes)
            .finish_non_exhaustive()
    }
}
