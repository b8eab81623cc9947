//! # Attribute Map
//!
//! The ordered key→value mapping behind a face.
//!
//! ## Semantics
//!
//! - Keys are unique at all times
//! - `set` on a present key overwrites in place, keeping its position
//! - `set` on an absent key appends
//! - `remove` on an absent key is a no-op
//!
//! Order is insertion order of first `set`, which is also the order the
//! attributes are handed to the document when applied.

use crate::EditorError;
use faceplate_literal::{parse, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute name, an atom such as `:weight`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Read a key from free text; only atoms are accepted
    pub fn parse(text: &str) -> Result<Self, EditorError> {
        Self::try_from(parse(text)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Value> for Key {
    type Error = EditorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Symbol(name) => Ok(Key(name)),
            other => Err(EditorError::MalformedKey(other.to_string())),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::new(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered attribute set with unique keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(Key, Value)>", into = "Vec<(Key, Value)>")]
pub struct AttributeMap {
    pairs: Vec<(Key, Value)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pairs; a repeated key overwrites its first occurrence
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<Key>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.set(key.into(), value);
        }
        map
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.position(key).map(|i| &self.pairs[i].1)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.position(key).is_some()
    }

    /// Insert or overwrite. Returns the previous value, if any.
    pub fn set(&mut self, key: Key, value: Value) -> Option<Value> {
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.pairs[i].1, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    /// Delete the pair for `key`. Returns the removed value, if any.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.position(key).map(|i| self.pairs.remove(i).1)
    }

    /// Value-returning form of [`set`](Self::set)
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.set(key.into(), value.into());
        self
    }

    /// Value-returning form of [`remove`](Self::remove)
    pub fn without(mut self, key: &Key) -> Self {
        self.remove(key);
        self
    }

    pub fn to_pairs(&self) -> &[(Key, Value)] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.pairs.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.pairs.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Property-list form, e.g. `(:weight bold :slant italic)`
    pub fn to_value(&self) -> Value {
        Value::List(
            self.pairs
                .iter()
                .flat_map(|(k, v)| [Value::Symbol(k.0.clone()), v.clone()])
                .collect(),
        )
    }

    /// Parse a property-list literal
    pub fn parse(text: &str) -> Result<Self, EditorError> {
        Self::try_from(parse(text)?)
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == key)
    }
}

impl TryFrom<Value> for AttributeMap {
    type Error = EditorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let items = match value {
            Value::List(items) => items,
            Value::Nil => return Ok(Self::new()),
            other => {
                return Err(EditorError::MalformedFace(format!(
                    "expected a property list, found {}",
                    other
                )))
            }
        };

        if items.len() % 2 != 0 {
            return Err(EditorError::MalformedFace(format!(
                "property list has an odd number of elements ({})",
                items.len()
            )));
        }

        let mut map = Self::new();
        let mut iter = items.into_iter();
        while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
            let key = Key::try_from(key)
                .map_err(|e| EditorError::MalformedFace(e.to_string()))?;
            map.set(key, value);
        }
        Ok(map)
    }
}

impl From<Vec<(Key, Value)>> for AttributeMap {
    fn from(pairs: Vec<(Key, Value)>) -> Self {
        Self::from_pairs(pairs)
    }
}

impl From<AttributeMap> for Vec<(Key, Value)> {
    fn from(map: AttributeMap) -> Self {
        map.pairs
    }
}

impl fmt::Display for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}
