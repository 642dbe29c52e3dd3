//! Ordered map type for SLIM records.
//!
//! This module provides [`SlimMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for record fields. Key order is part of the SLIM
//! data model: records encode their fields in insertion order and the decoder
//! rebuilds them in the same order, so it must survive the trip through the
//! in-memory representation.
//!
//! ## Why IndexMap?
//!
//! SLIM uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: fields serialize in a consistent order
//! - **First-occurrence column order**: table columns derive their order from
//!   the order keys first appear across rows
//! - **Compatibility**: predictable output makes testing and debugging easier
//!
//! ## Examples
//!
//! ```rust
//! use serde_slim::{SlimMap, SlimValue};
//!
//! let mut map = SlimMap::new();
//! map.insert("name".to_string(), SlimValue::from("Alice"));
//! map.insert("age".to_string(), SlimValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to SLIM values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order,
/// which the SLIM record and table encodings depend on.
///
/// # Examples
///
/// ```rust
/// use serde_slim::{SlimMap, SlimValue};
///
/// let mut map = SlimMap::new();
/// map.insert("first".to_string(), SlimValue::from(1));
/// map.insert("second".to_string(), SlimValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlimMap(IndexMap<String, crate::SlimValue>);

impl SlimMap {
    /// Creates an empty `SlimMap`.
    #[must_use]
    pub fn new() -> Self {
        SlimMap(IndexMap::new())
    }

    /// Creates an empty `SlimMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SlimMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_slim::{SlimMap, SlimValue};
    ///
    /// let mut map = SlimMap::new();
    /// assert!(map.insert("key".to_string(), SlimValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), SlimValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::SlimValue) -> Option<crate::SlimValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::SlimValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::SlimValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::SlimValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::SlimValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::SlimValue>> for SlimMap {
    fn from(map: HashMap<String, crate::SlimValue>) -> Self {
        SlimMap(map.into_iter().collect())
    }
}

impl From<SlimMap> for HashMap<String, crate::SlimValue> {
    fn from(map: SlimMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for SlimMap {
    type Item = (String, crate::SlimValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::SlimValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SlimMap {
    type Item = (&'a String, &'a crate::SlimValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::SlimValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::SlimValue)> for SlimMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::SlimValue)>>(iter: T) -> Self {
        SlimMap(IndexMap::from_iter(iter))
    }
}
