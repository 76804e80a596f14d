//! Event destinations. A sink receives every dispatched [`Event`] and is
//! responsible for serialization and output; failures stay inside the stream
//! and never reach logging callers.

pub mod json;
pub mod writer;

pub use json::JsonLinesSink;
pub use writer::WriterSink;

use crate::domain::Event;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Sink trait for event destinations (writer, JSON lines, in-memory, ...).
///
/// Implementations must be safe for concurrent use; the stream calls `emit`
/// from whatever thread the logging caller is on.
pub trait Sink: Send + Sync {
    fn emit(&self, event: &Event) -> Result<(), SinkError>;
}
