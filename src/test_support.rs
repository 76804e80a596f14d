//! Shared test support utilities
//!
//! Provides a [`MemorySink`] that captures emitted events for assertions in
//! unit and integration tests, with an optional failure mode to exercise the
//! sink-error path.

use crate::domain::Event;
use crate::sink::{Sink, SinkError};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Sink that captures events in memory. Clones share the same storage, so a
/// test can keep one handle and hand the other to the stream.
#[derive(Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<Event>>>,
    should_fail: Arc<AtomicBool>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of every captured event.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Just the messages, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.events.lock().iter().map(|e| e.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Sink for MemorySink {
    fn emit(&self, event: &Event) -> Result<(), SinkError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SinkError::Io(io::Error::other("memory sink failure")));
        }
        self.events.lock().push(event.clone());
        Ok(())
    }
}
