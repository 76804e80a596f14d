#![warn(rust_2018_idioms)]

//! Level-filtered job logging: a process-wide (or per-context) severity
//! filter in front of a shared event stream. Loggers are bound to a named
//! job; every emitted message carries a bracketed severity prefix and is
//! forwarded synchronously to the stream's sinks.

pub mod domain;
pub mod logger;
pub mod sink;
pub mod stream;
pub mod test_support;

// Re-export main types for easy access
pub use domain::{Event, JoblogError, Kvs, ParseSeverityError, Severity, Value};
pub use logger::{
    LogContext, Logger, default_context, init, init_stream, init_writer, level, new_logger,
    set_level,
};
pub use sink::{JsonLinesSink, Sink, SinkError, WriterSink};
pub use stream::{Job, Stream, StreamStats};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
