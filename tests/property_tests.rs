//! Property-based tests for ligno using proptest

use chrono::{TimeZone, Utc};
use ligno::formatters::escape_string;
use ligno::prelude::*;
use proptest::prelude::*;

/// Reverse of `escape_string`
fn unescape(encoded: &str) -> String {
    let inner = if encoded.len() >= 2 && encoded.starts_with('"') && encoded.ends_with('"') {
        &encoded[1..encoded.len() - 1]
    } else {
        encoded
    };

    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn level_strategy() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn test_escape_example_from_docs() {
    let escaped = escape_string("a \"b\"\tc");
    assert_eq!(escaped, r#""a \"b\"\tc""#);
    assert_eq!(unescape(&escaped), "a \"b\"\tc");
}

proptest! {
    /// Strings without special characters pass through untouched
    #[test]
    fn test_escape_identity(s in "[a-zA-Z0-9_.:/-]*") {
        prop_assert_eq!(escape_string(&s), s.as_str());
    }

    /// Unescaping recovers the original bytes
    #[test]
    fn test_escape_round_trip(s in "\\PC*|[ \"\\\\=\t\r\n a-z]*") {
        let escaped = escape_string(&s);
        prop_assert_eq!(unescape(&escaped), s);
    }

    /// Escaped output never spans lines
    #[test]
    fn test_escape_single_line(s in ".*[\n\r]?.*") {
        let escaped = escape_string(&s);
        prop_assert!(!escaped.contains('\n'));
        prop_assert!(!escaped.contains('\r'));
    }

    /// Anything containing a space, '=' or '"' is quoted
    #[test]
    fn test_escape_quotes_separators(prefix in "[a-z]*", sep in "[ =\"]", suffix in "[a-z]*") {
        let s = format!("{}{}{}", prefix, sep, suffix);
        let escaped = escape_string(&s);
        prop_assert!(escaped.starts_with('"') && escaped.ends_with('"'));
    }
}

// ============================================================================
// Field ordering
// ============================================================================

proptest! {
    /// logfmt output always starts with ts, lvl, msg regardless of pairs
    #[test]
    fn test_logfmt_default_fields_first(
        level in level_strategy(),
        message in "[a-z]{1,12}",
        pairs in prop::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..8),
    ) {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let mut event = Event::new(level, message.clone()).with_timestamp(ts);
        for (key, value) in &pairs {
            event = event.with_pair(key.as_str(), *value);
        }

        let out = String::from_utf8(LogfmtFormatter::new().format(&event)).unwrap();
        let expected_prefix = format!(
            "ts=2024-06-01T08:00:00.000000000Z lvl={} msg={}",
            level, message
        );
        prop_assert!(out.starts_with(&expected_prefix));
        prop_assert!(out.ends_with('\n'));
        prop_assert_eq!(out.matches('\n').count(), 1);
        prop_assert_eq!(out.split(' ').count(), 3 + pairs.len());
    }

    /// Every formatter terminates with exactly one newline
    #[test]
    fn test_single_trailing_newline(level in level_strategy(), message in "[^\n\r]*") {
        let event = Event::new(level, message);
        let formatters: Vec<Box<dyn Formatter>> = vec![
            Box::new(SimpleFormatter::new()),
            Box::new(TerminalFormatter::new(Theme::no_color())),
            Box::new(JsonFormatter::compact()),
            Box::new(LogfmtFormatter::new()),
        ];
        for formatter in formatters {
            let out = formatter.format(&event);
            prop_assert_eq!(out.last(), Some(&b'\n'));
            prop_assert_ne!(out.get(out.len().saturating_sub(2)), Some(&b'\n'));
        }
    }

    /// JSON output stays valid for arbitrary messages and finite values
    #[test]
    fn test_json_always_parses(message in ".*", value in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let event = Event::new(LogLevel::Info, message.clone()).with_pair("v", value);
        let out = JsonFormatter::compact().format(&event);
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        prop_assert_eq!(parsed["msg"].as_str(), Some(message.as_str()));
    }
}

// ============================================================================
// LogLevel
// ============================================================================

proptest! {
    /// Level filters pass exactly the events at or above the threshold
    #[test]
    fn test_level_filter_threshold(threshold in level_strategy(), level in level_strategy()) {
        let memory = MemoryHandler::new(SimpleFormatter::new());
        let mut filter = FilterHandler::level(threshold, memory.clone());
        filter.handle(&Event::new(level, "probe")).unwrap();
        prop_assert_eq!(memory.len(), usize::from(level >= threshold));
    }

    /// LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in level_strategy()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }
}
