//! Minimal single-line formatter

use crate::core::{Event, Formatter, TimestampFormat};

/// Renders `<timestamp> <message> [<file>:<line>]`
///
/// Context and pairs are ignored; the location is omitted when the event has
/// no call site.
#[derive(Debug, Clone, Default)]
pub struct SimpleFormatter {
    timestamp_format: TimestampFormat,
}

impl SimpleFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Formatter for SimpleFormatter {
    fn format(&self, event: &Event) -> Vec<u8> {
        let mut line = self.timestamp_format.format(&event.timestamp);
        line.push(' ');
        line.push_str(&event.message);
        if let Some(site) = &event.call_site {
            line.push_str(&format!(" [{}:{}]", site.file, site.line));
        }
        line.push('\n');
        line.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Context, LogLevel};
    use chrono::{TimeZone, Utc};

    fn event() -> Event {
        let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        Event::new(LogLevel::Info, "server started").with_timestamp(ts)
    }

    #[test]
    fn test_without_call_site() {
        let out = SimpleFormatter::new().format(&event());
        assert_eq!(out, b"2025-01-08T10:30:45.000000000Z server started\n");
    }

    #[test]
    fn test_with_call_site() {
        let out = SimpleFormatter::new().format(&event().with_call_site("src/main.rs", 42));
        assert_eq!(
            out,
            b"2025-01-08T10:30:45.000000000Z server started [src/main.rs:42]\n"
        );
    }

    #[test]
    fn test_ignores_context_and_pairs() {
        let ctx = Context::new().with_field("service", "api");
        let out = SimpleFormatter::new()
            .with_timestamp_format(TimestampFormat::Unix)
            .format(&event().with_context_map(&ctx).with_pair("port", 80));
        assert_eq!(out, b"1736332245 server started\n");
    }
}
