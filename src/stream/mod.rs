//! The shared event stream and its per-job handles.
//!
//! A [`Stream`] owns the attached sinks; a [`Job`] is a named handle created
//! from it. Dispatch is synchronous and fire-and-forget: every event fans out
//! to all sinks on the caller's thread, and sink failures are counted and
//! reported internally instead of surfacing to the caller.

use crate::domain::{Event, Kvs};
use crate::sink::Sink;
use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

struct Shared {
    sinks: RwLock<Vec<Arc<dyn Sink>>>,
    events: AtomicU64,
    sink_errors: AtomicU64,
}

/// Cheaply cloneable handle to the shared stream state. All clones and all
/// jobs created from them dispatch into the same sink set.
#[derive(Clone)]
pub struct Stream {
    shared: Arc<Shared>,
}

/// Snapshot of stream dispatch counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreamStats {
    pub events: u64,
    pub sink_errors: u64,
}

impl Stream {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                sinks: RwLock::new(Vec::new()),
                events: AtomicU64::new(0),
                sink_errors: AtomicU64::new(0),
            }),
        }
    }

    #[must_use]
    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        let stream = Self::new();
        stream.add_sink(sink);
        stream
    }

    /// Attach another sink. Safe to call at any time; events dispatched after
    /// the call fan out to the new sink as well.
    pub fn add_sink(&self, sink: impl Sink + 'static) {
        self.shared.sinks.write().push(Arc::new(sink));
    }

    pub fn sink_count(&self) -> usize {
        self.shared.sinks.read().len()
    }

    /// Create a named job handle on this stream.
    #[must_use]
    pub fn job(&self, name: impl Into<String>) -> Job {
        Job {
            stream: self.clone(),
            name: Arc::from(name.into()),
        }
    }

    pub fn stats(&self) -> StreamStats {
        StreamStats {
            events: self.shared.events.load(Ordering::Relaxed),
            sink_errors: self.shared.sink_errors.load(Ordering::Relaxed),
        }
    }

    fn dispatch(&self, event: Event) {
        let sinks = self.shared.sinks.read();
        for sink in sinks.iter() {
            if let Err(e) = sink.emit(&event) {
                self.shared.sink_errors.fetch_add(1, Ordering::Relaxed);
                warn!(job = %event.job, error = %e, "event sink failed");
            }
        }
        self.shared.events.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for Stream {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("sinks", &self.sink_count())
            .field("stats", &self.stats())
            .finish()
    }
}

/// Named handle for attaching events to one logical unit of work.
#[derive(Clone)]
pub struct Job {
    stream: Stream,
    name: Arc<str>,
}

impl Job {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dispatch a plain event against this job.
    pub fn event(&self, message: impl Into<String>) {
        self.stream.dispatch(Event::new(self.name.as_ref(), message));
    }

    /// Dispatch an event carrying the caller's key-value mapping, unmodified.
    pub fn event_kv(&self, message: impl Into<String>, kvs: Kvs) {
        self.stream
            .dispatch(Event::with_kvs(self.name.as_ref(), message, kvs));
    }
}

impl fmt::Debug for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Job").field("name", &self.name).finish()
    }
}
