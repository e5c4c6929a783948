//! Value encoding shared by the key/value formatters
//!
//! `escape_string` follows logfmt conventions: a value is quoted when it
//! contains a space, control character, `=` or `"`, and backslash escapes are
//! applied for `\`, `"`, newline, carriage return and tab. Strings that need
//! neither are returned borrowed.

use crate::core::value::non_finite_name;
use crate::core::{TimestampFormat, Value};
use std::borrow::Cow;

/// Key substituted for any key that is not a string
pub const PARSE_ERROR_KEY: &str = "PARSE_ERROR";

/// Whether a key containing `c` must be quoted in terminal output
///
/// True for space, quote, backslash, `=` and anything not printable:
/// whitespace, control, format (Cf), private-use and noncharacter code points.
pub fn needs_quote(c: char) -> bool {
    matches!(c, ' ' | '"' | '\\' | '=')
        || c.is_whitespace()
        || c.is_control()
        || is_format_char(c)
        || is_private_use_or_noncharacter(c)
}

/// Unicode general category Cf
fn is_format_char(c: char) -> bool {
    matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{890}'..='\u{891}'
            | '\u{8e2}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{110bd}'
            | '\u{110cd}'
            | '\u{13430}'..='\u{1343f}'
            | '\u{1bca0}'..='\u{1bca3}'
            | '\u{1d173}'..='\u{1d17a}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
    )
}

fn is_private_use_or_noncharacter(c: char) -> bool {
    let cp = u32::from(c);
    matches!(cp, 0xe000..=0xf8ff | 0xf0000..=0x10ffff | 0xfdd0..=0xfdef) || cp & 0xfffe == 0xfffe
}

/// Escape and, where necessary, quote a string for logfmt output
///
/// # Examples
///
/// ```
/// use ligno::formatters::escape_string;
///
/// assert_eq!(escape_string("hello"), "hello");
/// assert_eq!(escape_string("a b"), "\"a b\"");
/// assert_eq!(escape_string(r"C:\tmp"), r"C:\\tmp");
/// ```
pub fn escape_string(s: &str) -> Cow<'_, str> {
    let mut needs_quotes = false;
    let mut needs_escape = false;
    for c in s.chars() {
        if c <= ' ' || c == '=' || c == '"' {
            needs_quotes = true;
        }
        if matches!(c, '\\' | '"' | '\n' | '\r' | '\t') {
            needs_escape = true;
        }
    }
    if !needs_quotes && !needs_escape {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 2);
    if needs_quotes {
        escaped.push('"');
    }
    for c in s.chars() {
        match c {
            '\\' | '"' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    if needs_quotes {
        escaped.push('"');
    }
    Cow::Owned(escaped)
}

/// Fixed-point rendering with three decimals
pub fn format_float(f: f64) -> String {
    if f.is_finite() {
        format!("{:.3}", f)
    } else {
        non_finite_name(f).to_string()
    }
}

/// Render a value for logfmt output
pub fn encode_value<'a>(value: &'a Value, timestamp_format: &TimestampFormat) -> Cow<'a, str> {
    match value {
        Value::Nil => Cow::Borrowed("nil"),
        Value::Time(t) => {
            let rendered = timestamp_format.format(t);
            if timestamp_format.needs_escaping() {
                Cow::Owned(escape_string(&rendered).into_owned())
            } else {
                Cow::Owned(rendered)
            }
        }
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Float(f) => Cow::Owned(format_float(*f)),
        Value::Int(i) => Cow::Owned(i.to_string()),
        Value::Uint(u) => Cow::Owned(u.to_string()),
        Value::Str(s) => escape_string(s),
        Value::Level(_) | Value::Error(_) | Value::Display(_) => {
            Cow::Owned(escape_string(&value.to_string()).into_owned())
        }
    }
}
