//! Static key/value context bound to a logger
//!
//! A `Context` is assembled before any event exists and flattened once into
//! the shared, read-only pair sequence every event of that logger carries.

use super::value::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Ordered mapping from key to value
///
/// Keys iterate in lexical order so the flattened pair sequence, and
/// therefore formatter output, is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Context {
    fields: BTreeMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Add a field to the context
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the context (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Produce a new context holding `self` overlaid by `other`
    ///
    /// On key collision the entry from `other` wins. Neither input changes.
    #[must_use]
    pub fn merge(&self, other: &Context) -> Context {
        let mut fields = self.fields.clone();
        for (key, value) in &other.fields {
            fields.insert(key.clone(), value.clone());
        }
        Context { fields }
    }

    /// Flatten into the alternating key/value sequence stored on events
    pub fn to_pairs(&self) -> Arc<[Value]> {
        self.fields
            .iter()
            .flat_map(|(k, v)| [Value::Str(k.clone()), v.clone()])
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&formatted)
    }
}
