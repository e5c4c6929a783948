//! Assembly of the ordered field list shared by the key/value formatters

use super::encode::PARSE_ERROR_KEY;
use crate::core::{Event, Value};
use std::borrow::Cow;

/// One resolved key/value entry
#[derive(Debug, Clone)]
pub(crate) struct Field<'a> {
    pub key: &'a str,
    pub value: Cow<'a, Value>,
}

impl<'a> Field<'a> {
    fn owned(key: &'a str, value: Value) -> Self {
        Self {
            key,
            value: Cow::Owned(value),
        }
    }
}

/// Build `ts, lvl, msg`, then static context, then call-site pairs, then
/// optionally `file, line`.
///
/// Error values in the static context are flattened to text. Keys that are
/// not strings become `PARSE_ERROR` with the offending key as value. A
/// trailing key without value is paired with `nil`. Duplicates are kept.
pub(crate) fn collect_fields(event: &Event, include_call_site: bool) -> Vec<Field<'_>> {
    let mut fields = Vec::with_capacity(5 + (event.context.len() + event.pairs.len()) / 2);

    fields.push(Field::owned("ts", Value::Time(event.timestamp)));
    fields.push(Field::owned("lvl", Value::Level(event.level)));
    fields.push(Field::owned("msg", Value::Str(event.message.clone())));

    for pair in event.context.chunks(2) {
        let value = match pair.get(1) {
            Some(value) => value
                .flatten_error()
                .map_or(Cow::Borrowed(value), Cow::Owned),
            None => Cow::Owned(Value::Nil),
        };
        push_pair(&mut fields, &pair[0], value);
    }

    for pair in event.pairs.chunks(2) {
        let value = pair.get(1).map_or(Cow::Owned(Value::Nil), Cow::Borrowed);
        push_pair(&mut fields, &pair[0], value);
    }

    if include_call_site {
        if let Some(site) = &event.call_site {
            fields.push(Field::owned("file", Value::Str(site.file.clone())));
            fields.push(Field::owned("line", Value::Int(i64::from(site.line))));
        }
    }

    fields
}

fn push_pair<'a>(fields: &mut Vec<Field<'a>>, key: &'a Value, value: Cow<'a, Value>) {
    match key.as_str() {
        Some(key) => fields.push(Field { key, value }),
        None => fields.push(Field {
            key: PARSE_ERROR_KEY,
            value: Cow::Borrowed(key),
        }),
    }
}
