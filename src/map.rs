//! Ordered map type for object values.
//!
//! This module provides [`SqlMap`], a wrapper around [`IndexMap`] that keeps
//! object fields in insertion order. Object values render only as JSON text
//! (the `'{...}'::jsonb` literal form), and insertion order keeps that text
//! deterministic across runs, which matters for query caching and for tests
//! that compare rendered SQL.
//!
//! ## Examples
//!
//! ```rust
//! use pg_format::{quote_literal, SqlMap, Value};
//!
//! let mut map = SqlMap::new();
//! map.insert("a".to_string(), Value::from(1));
//! map.insert("b".to_string(), Value::from(2));
//!
//! let literal = quote_literal(map).unwrap();
//! assert_eq!(literal, r#"'{"a":1,"b":2}'::jsonb"#);
//! ```

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::Value;

/// An insertion-ordered map of string keys to [`Value`]s.
///
/// Backs [`Value::Object`]. A thin wrapper over [`IndexMap`] so the JSON
/// rendering of an object value always lists fields in the order they were
/// inserted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SqlMap(IndexMap<String, Value>);

impl SqlMap {
    /// Creates an empty `SqlMap`.
    #[must_use]
    pub fn new() -> Self {
        SqlMap(IndexMap::new())
    }

    /// Creates an empty `SqlMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SqlMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key
    /// if there was one.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Serialize for SqlMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl From<HashMap<String, Value>> for SqlMap {
    fn from(map: HashMap<String, Value>) -> Self {
        SqlMap(map.into_iter().collect())
    }
}

impl IntoIterator for SqlMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for SqlMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        SqlMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut map = SqlMap::new();
        map.insert("z".to_string(), Value::from(1));
        map.insert("a".to_string(), Value::from(2));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn json_follows_insertion_order() {
        let mut map = SqlMap::new();
        map.insert("b".to_string(), Value::from(2));
        map.insert("a".to_string(), Value::from(1));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"b":2,"a":1}"#);
    }

    #[test]
    fn insert_replaces() {
        let mut map = SqlMap::new();
        assert!(map.insert("k".to_string(), Value::from(1)).is_none());
        assert!(map.insert("k".to_string(), Value::from(2)).is_some());
        assert_eq!(map.len(), 1);
    }
}
