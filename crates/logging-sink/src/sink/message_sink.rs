use std::fmt;
use std::io::{self, Write};
use std::mem;

/// Boxed writer accepted by [`MessageSink`].
pub type BoxedWriter = Box<dyn Write + Send>;

/// Owned destination for rendered log lines.
///
/// The sink wraps an arbitrary [`Write`] implementor behind a box so the
/// destination of a tier can be swapped at runtime (standard error, a file,
/// an in-memory [`MemorySink`](crate::MemorySink)) without changing the type
/// of the surrounding tables.
///
/// # Examples
///
/// ```
/// use logging_sink::{MemorySink, MessageSink};
///
/// let capture = MemorySink::new();
/// let mut sink = MessageSink::new(capture.clone());
/// sink.write_line("worker: started\n")?;
/// assert_eq!(capture.contents(), "worker: started\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct MessageSink {
    writer: BoxedWriter,
}

impl MessageSink {
    /// Creates a sink that writes into `writer`.
    #[must_use]
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_boxed(Box::new(writer))
    }

    /// Creates a sink from an already boxed writer.
    #[must_use]
    pub fn from_boxed(writer: BoxedWriter) -> Self {
        Self { writer }
    }

    /// Creates a sink that writes to the process's standard error stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Replaces the underlying writer and returns the previous one.
    ///
    /// The previous writer is handed back so buffered output can be flushed
    /// or inspected before it is dropped.
    #[must_use = "the returned writer may hold output produced before the replacement"]
    pub fn replace_writer(&mut self, mut writer: BoxedWriter) -> BoxedWriter {
        mem::swap(&mut self.writer, &mut writer);
        writer
    }

    /// Writes one fully rendered line and flushes the writer.
    ///
    /// The line is handed to the writer with a single
    /// [`write_all`](Write::write_all) call; callers serialise access so lines
    /// from concurrent callers never interleave.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Default for MessageSink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for MessageSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink").finish_non_exhaustive()
    }
}
