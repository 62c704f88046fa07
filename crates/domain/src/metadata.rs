//! Log metadata: insertion-ordered key/value fields and merge rules.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Metadata attached to a log call.
///
/// Keys keep their insertion order so JSON output lists fields in the order
/// callers supplied them.
pub type LogFields = serde_json::Map<String, Value>;

/// Build fields from key/value pairs.
pub fn fields<I, K, V>(pairs: I) -> LogFields
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Shallow merge: `base` first, `call` wins on key collision.
///
/// A key overridden by `call` keeps the position it had in `base`. The
/// call-site entries are moved into the result.
#[must_use]
pub fn merge_fields(base: &LogFields, call: LogFields) -> LogFields {
    if base.is_empty() {
        return call;
    }
    let mut merged = base.clone();
    merged.extend(call);
    merged
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Metadata value for a point in time, serialized as [`format_timestamp`].
#[must_use]
pub fn timestamp_value(at: DateTime<Utc>) -> Value {
    Value::String(format_timestamp(at))
}
