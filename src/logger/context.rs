use super::Logger;
use crate::domain::{JoblogError, Severity};
use crate::sink::{Sink, WriterSink};
use crate::stream::Stream;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};

pub(crate) struct ContextInner {
    // Severity discriminant; release store / acquire load so a level change
    // is immediately visible to every logger of this context.
    level: AtomicU8,
    stream: OnceLock<Stream>,
}

impl ContextInner {
    pub(crate) fn level(&self) -> Severity {
        Severity::from_u8(self.level.load(Ordering::Acquire))
    }

    fn set_level(&self, level: Severity) {
        self.level.store(level as u8, Ordering::Release);
    }
}

/// Explicit logging context: one filter level plus one init-once stream.
///
/// Contexts are independent of each other; cloning shares the same level and
/// stream. The process-wide default used by [`crate::init`] is just one
/// instance of this type.
#[derive(Clone)]
pub struct LogContext {
    inner: Arc<ContextInner>,
}

impl LogContext {
    /// New context with the level at `Debug` (everything emits) and no
    /// stream attached yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ContextInner {
                level: AtomicU8::new(Severity::Debug as u8),
                stream: OnceLock::new(),
            }),
        }
    }

    /// Create the shared stream with the given sink attached. First call
    /// wins; once a stream exists, later calls are no-ops and their sink
    /// receives no output.
    pub fn initialize(&self, sink: impl Sink + 'static) {
        let _ = self.inner.stream.get_or_init(|| Stream::with_sink(sink));
    }

    /// Like [`initialize`](Self::initialize) with the writer wrapped in a
    /// line-oriented [`WriterSink`].
    pub fn initialize_writer(&self, writer: impl Write + Send + 'static) {
        self.initialize(WriterSink::new(writer));
    }

    /// Attach a pre-built stream (e.g. one with several sinks). Same
    /// first-call-wins semantics as [`initialize`](Self::initialize).
    pub fn initialize_stream(&self, stream: Stream) {
        let _ = self.inner.stream.get_or_init(|| stream);
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.stream.get().is_some()
    }

    /// The attached stream, `None` before initialization.
    pub fn stream(&self) -> Option<&Stream> {
        self.inner.stream.get()
    }

    /// Replace the filter level. Infallible, callable before initialization,
    /// and visible to all existing and future loggers of this context.
    pub fn set_level(&self, level: Severity) {
        self.inner.set_level(level);
    }

    pub fn level(&self) -> Severity {
        self.inner.level()
    }

    /// Create a logger bound to a job under `name`.
    ///
    /// Fails with [`JoblogError::NotInitialized`] if no stream was attached;
    /// calling before initialization is a programmer error and is reported
    /// instead of crashing later.
    pub fn logger(&self, name: impl Into<String>) -> Result<Logger, JoblogError> {
        let stream = self
            .inner
            .stream
            .get()
            .ok_or(JoblogError::NotInitialized)?;
        Ok(Logger::new(stream.job(name), Arc::clone(&self.inner)))
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("level", &self.level())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemorySink;

    #[test]
    fn logger_before_initialize_fails_fast() {
        let ctx = LogContext::new();
        let err = ctx.logger("early").unwrap_err();
        assert_eq!(err.to_string(), "logging stream is not initialized");
        assert!(matches!(err, JoblogError::NotInitialized));
    }

    #[test]
    fn initialize_is_first_call_wins() {
        let first = MemorySink::new();
        let second = MemorySink::new();
        let ctx = LogContext::new();

        ctx.initialize(first.clone());
        ctx.initialize(second.clone());
        ctx.logger("svc").unwrap().error("boom");

        assert_eq!(first.events().len(), 1);
        assert!(second.events().is_empty());
    }

    #[test]
    fn set_level_works_before_initialize() {
        let ctx = LogContext::new();
        ctx.set_level(Severity::Warning);
        assert_eq!(ctx.level(), Severity::Warning);

        let sink = MemorySink::new();
        ctx.initialize(sink.clone());
        ctx.logger("svc").unwrap().info("filtered");
        assert!(sink.events().is_empty());
    }

    #[test]
    fn contexts_are_isolated() {
        let (a_sink, b_sink) = (MemorySink::new(), MemorySink::new());
        let a = LogContext::new();
        let b = LogContext::new();
        a.initialize(a_sink.clone());
        b.initialize(b_sink.clone());

        a.set_level(Severity::Error);
        a.logger("a").unwrap().info("dropped");
        b.logger("b").unwrap().info("kept");

        assert!(a_sink.events().is_empty());
        assert_eq!(b_sink.messages(), vec!["[INFO] kept"]);
    }

    #[test]
    fn default_level_is_debug() {
        assert_eq!(LogContext::new().level(), Severity::Debug);
    }

    #[test]
    fn clones_share_state() {
        let sink = MemorySink::new();
        let ctx = LogContext::new();
        let clone = ctx.clone();

        clone.initialize(sink.clone());
        ctx.set_level(Severity::Info);

        assert!(ctx.is_initialized());
        assert_eq!(clone.level(), Severity::Info);
    }
}
