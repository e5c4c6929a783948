//! JSON formatter

use super::fields::collect_fields;
use crate::core::{Event, Formatter, TimestampFormat, Value};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serializes the field list as one JSON object
///
/// Fields are collected into a map, so a repeated key keeps its last value
/// and key order is not part of the contract. Values that cannot be
/// represented (non-finite floats) turn the whole record into
/// `{"JSONError":"<reason>"}`.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pretty: bool,
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    /// Single-line output
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented output, four spaces per level
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn encode(&self, event: &Event) -> serde_json::Result<Vec<u8>> {
        let mut object = serde_json::Map::new();
        for field in collect_fields(event, true) {
            let value = match field.value.as_ref() {
                Value::Time(t) => self.timestamp_json(t),
                other => serde_json::to_value(other)?,
            };
            object.insert(field.key.to_string(), value);
        }
        let object = serde_json::Value::Object(object);

        if self.pretty {
            let mut buf = Vec::new();
            let mut serializer =
                serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
            object.serialize(&mut serializer)?;
            Ok(buf)
        } else {
            serde_json::to_vec(&object)
        }
    }

    /// Numeric layouts stay numbers, everything else becomes a string
    fn timestamp_json(&self, timestamp: &DateTime<FixedOffset>) -> serde_json::Value {
        match self.timestamp_format {
            TimestampFormat::Unix => timestamp.timestamp().into(),
            TimestampFormat::UnixMillis => timestamp.timestamp_millis().into(),
            TimestampFormat::UnixMicros => timestamp.timestamp_micros().into(),
            _ => serde_json::Value::String(self.timestamp_format.format(timestamp)),
        }
    }
}

fn fallback(err: &serde_json::Error) -> Vec<u8> {
    let mut object = serde_json::Map::new();
    object.insert(
        "JSONError".to_string(),
        serde_json::Value::String(err.to_string()),
    );
    serde_json::to_vec(&serde_json::Value::Object(object)).unwrap_or_default()
}

impl Formatter for JsonFormatter {
    fn format(&self, event: &Event) -> Vec<u8> {
        let mut out = self.encode(event).unwrap_or_else(|err| fallback(&err));
        out.push(b'\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Context, LogLevel};
    use chrono::{TimeZone, Utc};

    fn event() -> Event {
        let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        Event::new(LogLevel::Warn, "disk almost full").with_timestamp(ts)
    }

    fn parse(bytes: &[u8]) -> serde_json::Value {
        serde_json::from_slice(bytes).expect("valid JSON")
    }

    #[test]
    fn test_compact_fields() {
        let out = JsonFormatter::compact().format(&event().with_pair("free_mb", 120u32));

        assert_eq!(out.last(), Some(&b'\n'));
        assert_eq!(out.iter().filter(|b| **b == b'\n').count(), 1);

        let parsed = parse(&out);
        assert_eq!(parsed["ts"], "2025-01-08T10:30:45.000000000Z");
        assert_eq!(parsed["lvl"], "WARN");
        assert_eq!(parsed["msg"], "disk almost full");
        assert_eq!(parsed["free_mb"], 120);
        assert!(parsed.get("file").is_none());
    }

    #[test]
    fn test_call_site_fields() {
        let out = JsonFormatter::compact().format(&event().with_call_site("db.rs", 7));
        let parsed = parse(&out);
        assert_eq!(parsed["file"], "db.rs");
        assert_eq!(parsed["line"], 7);
    }

    #[test]
    fn test_pretty_uses_four_spaces() {
        let out = JsonFormatter::pretty().format(&event());
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("{\n    \""));
        assert!(text.contains("\n    \"lvl\": \"WARN\""));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_context_error_becomes_string() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let ctx = Context::new().with_field("cause", Value::error(err));
        let parsed = parse(&JsonFormatter::compact().format(&event().with_context_map(&ctx)));
        assert_eq!(parsed["cause"], "connection reset");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let parsed = parse(
            &JsonFormatter::compact().format(&event().with_pair("id", 1).with_pair("id", 2)),
        );
        assert_eq!(parsed["id"], 2);
    }

    #[test]
    fn test_unserializable_value_falls_back() {
        let out = JsonFormatter::compact().format(&event().with_pair("ratio", f64::NAN));
        assert_eq!(out, b"{\"JSONError\":\"unsupported value: NaN\"}\n");
    }

    #[test]
    fn test_numeric_timestamp() {
        let out = JsonFormatter::compact()
            .with_timestamp_format(TimestampFormat::Unix)
            .format(&event());
        assert_eq!(parse(&out)["ts"], 1736332245);
    }
}
