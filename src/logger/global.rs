// Process-wide default context, for callers that want the classic
// one-stream-per-process shape instead of threading a LogContext around.

use super::Logger;
use super::context::LogContext;
use crate::domain::{JoblogError, Severity};
use crate::sink::Sink;
use crate::stream::Stream;
use std::io::Write;
use std::sync::LazyLock;

static DEFAULT: LazyLock<LogContext> = LazyLock::new(LogContext::new);

/// Idempotently create the process-wide stream with `sink` attached.
/// The first call wins; later calls are ignored without error.
pub fn init(sink: impl Sink + 'static) {
    DEFAULT.initialize(sink);
}

/// [`init`] with the writer wrapped in a line-oriented
/// [`WriterSink`](crate::sink::WriterSink).
pub fn init_writer(writer: impl Write + Send + 'static) {
    DEFAULT.initialize_writer(writer);
}

/// [`init`] with a pre-built stream (e.g. carrying several sinks).
pub fn init_stream(stream: Stream) {
    DEFAULT.initialize_stream(stream);
}

/// Replace the process-wide filter level. Visible to all existing and future
/// loggers created through this module.
pub fn set_level(level: Severity) {
    DEFAULT.set_level(level);
}

pub fn level() -> Severity {
    DEFAULT.level()
}

/// New logger bound to a job under `name` on the process-wide stream.
/// Fails with [`JoblogError::NotInitialized`] before [`init`].
pub fn new_logger(name: impl Into<String>) -> Result<Logger, JoblogError> {
    DEFAULT.logger(name)
}

/// The process-wide context itself, e.g. for stream stats.
pub fn default_context() -> &'static LogContext {
    &DEFAULT
}
