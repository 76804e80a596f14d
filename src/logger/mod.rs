//! The level-filtered facade over the event stream.
//!
//! A [`LogContext`] owns the filter level and the (init-once) stream;
//! [`Logger`] instances bind one job to that context. The `global` functions
//! re-exported here serve callers that want a single process-wide context.

mod context;
mod global;

pub use context::LogContext;
pub use global::{default_context, init, init_stream, init_writer, level, new_logger, set_level};

use crate::domain::{Kvs, Severity};
use crate::stream::Job;
use context::ContextInner;
use std::fmt;
use std::sync::Arc;

/// Logger bound to one named job. All loggers of a context share its filter
/// level; none of the emit methods can fail or block the caller's work.
#[derive(Clone)]
pub struct Logger {
    job: Job,
    ctx: Arc<ContextInner>,
}

impl Logger {
    pub(crate) fn new(job: Job, ctx: Arc<ContextInner>) -> Self {
        Self { job, ctx }
    }

    pub fn name(&self) -> &str {
        self.job.name()
    }

    // Emit iff current level <= message severity; Error bypasses the filter.
    fn enabled(&self, severity: Severity) -> bool {
        severity == Severity::Error || self.ctx.level() <= severity
    }

    fn emit(&self, severity: Severity, message: &str) {
        if !self.enabled(severity) {
            return;
        }
        self.job.event(format!("{}{}", severity.prefix(), message));
    }

    fn emit_kv(&self, severity: Severity, message: &str, kvs: Kvs) {
        if !self.enabled(severity) {
            return;
        }
        self.job
            .event_kv(format!("{}{}", severity.prefix(), message), kvs);
    }

    pub fn debug(&self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    /// Errors always surface, regardless of the current filter level.
    pub fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }

    pub fn debug_kv(&self, message: &str, kvs: Kvs) {
        self.emit_kv(Severity::Debug, message, kvs);
    }

    pub fn info_kv(&self, message: &str, kvs: Kvs) {
        self.emit_kv(Severity::Info, message, kvs);
    }

    pub fn warn_kv(&self, message: &str, kvs: Kvs) {
        self.emit_kv(Severity::Warning, message, kvs);
    }

    pub fn error_kv(&self, message: &str, kvs: Kvs) {
        self.emit_kv(Severity::Error, message, kvs);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("job", &self.job.name())
            .field("level", &self.ctx.level())
            .finish()
    }
}
