use super::{Sink, SinkError};
use crate::domain::Event;
use chrono::SecondsFormat;
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::io::Write;

/// Line-oriented text sink over any writable destination.
///
/// One line per event:
///
/// ```text
/// [2026-08-07T10:15:30.123Z] worker: [INFO] started attempt=1 dry_run=false
/// ```
///
/// The writer is mutex-guarded; each event is a single `write_all` followed
/// by a flush, so concurrent loggers never interleave within a line.
pub struct WriterSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl WriterSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }

    fn format_line(event: &Event) -> String {
        let mut line = format!(
            "[{}] {}: {}",
            event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            event.job,
            event.message,
        );
        for (key, value) in event.kvs.iter() {
            // fmt::Write to a String cannot fail
            let _ = write!(line, " {key}={value}");
        }
        line.push('\n');
        line
    }
}

impl Sink for WriterSink {
    fn emit(&self, event: &Event) -> Result<(), SinkError> {
        let line = Self::format_line(event);
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
