use super::kvs::Kvs;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single record against a job: timestamp, job name, formatted message,
/// and an optional key-value payload. This is what sinks receive; the
/// severity prefix has already been folded into `message` by the facade.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    pub job: String,
    pub message: String,
    #[serde(skip_serializing_if = "Kvs::is_empty")]
    pub kvs: Kvs,
}

impl Event {
    pub fn new(job: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_kvs(job, message, Kvs::new())
    }

    pub fn with_kvs(job: impl Into<String>, message: impl Into<String>, kvs: Kvs) -> Self {
        Self {
            timestamp: Utc::now(),
            job: job.into(),
            message: message.into(),
            kvs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_event_has_empty_kvs() {
        let event = Event::new("worker", "[INFO] started");
        assert_eq!(event.job, "worker");
        assert_eq!(event.message, "[INFO] started");
        assert!(event.kvs.is_empty());
    }

    #[test]
    fn empty_kvs_skipped_in_json() {
        let event = Event::new("worker", "[INFO] started");
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("kvs"));

        let event = Event::with_kvs("worker", "[INFO] started", Kvs::new().with("k", "v"));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""kvs":{"k":"v"}"#));
    }
}
