//! Single-line JSON formatter for structured environments.

use envlog_domain::format_timestamp;
use envlog_ports::{Clock, LineFormatter, LogEvent};
use serde_json::Value;

const SERIALIZE_FAILED: &str =
    "{\"level\":\"error\",\"message\":\"log serialization failed\",\"timestamp\":null}";

/// `{"level":…,"message":…,"timestamp":…}` with metadata flattened in.
///
/// Metadata keys named `level`, `message` or `timestamp` replace those
/// values in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter {
    timestamp: bool,
}

impl JsonFormatter {
    /// Formatter that stamps each record.
    #[must_use]
    pub const fn new() -> Self {
        Self { timestamp: true }
    }

    /// Toggle the `timestamp` field.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl LineFormatter for JsonFormatter {
    fn format(&self, event: &LogEvent, clock: &dyn Clock) -> String {
        let mut payload = serde_json::Map::new();
        payload.insert("level".to_owned(), Value::from(event.level.as_str()));
        payload.insert("message".to_owned(), Value::from(&*event.message));
        if self.timestamp {
            payload.insert("timestamp".to_owned(), Value::from(format_timestamp(clock.now())));
        }
        for (key, value) in &event.fields {
            payload.insert(key.clone(), value.clone());
        }

        serde_json::to_string(&Value::Object(payload)).unwrap_or_else(|error| {
            tracing::warn!(%error, "log serialization failed");
            SERIALIZE_FAILED.to_owned()
        })
    }
}
