//! Ordered map type for mapping values.
//!
//! This module provides [`Mapping`], a wrapper around [`IndexMap`] that keeps
//! keys in insertion order. Order matters here: it decides the order of the
//! lines and sections in the rendered output.
//!
//! Inserting an existing key replaces its value but keeps the key where it was
//! first inserted.
//!
//! ## Examples
//!
//! ```rust
//! use conftoml::{Mapping, Name, Value};
//!
//! let mut map = Mapping::new();
//! map.insert(Name::new("port").unwrap(), Value::from(8080));
//! map.insert(Name::new("workers").unwrap(), Value::from(4));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("port").and_then(|v| v.as_i64()), Some(8080));
//! ```

use crate::{Name, Value};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An ordered map of names to values.
///
/// # Examples
///
/// ```rust
/// use conftoml::{Mapping, Name, Value};
///
/// let mut map = Mapping::new();
/// map.insert(Name::new("first").unwrap(), Value::from(1));
/// map.insert(Name::new("second").unwrap(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().map(|k| k.as_str()).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mapping(IndexMap<Name, Value>);

impl Mapping {
    #[must_use]
    pub fn new() -> Self {
        Mapping(IndexMap::new())
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftoml::{Mapping, Name, Value};
    ///
    /// let mut map = Mapping::new();
    /// assert!(map.insert(Name::new("key").unwrap(), Value::from(42)).is_none());
    /// assert!(map.insert(Name::new("key").unwrap(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: Name, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Name, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Name, Value> {
        self.0.iter()
    }
}

impl IntoIterator for Mapping {
    type Item = (Name, Value);
    type IntoIter = indexmap::map::IntoIter<Name, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a Name, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Name, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Name, Value)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (Name, Value)>>(iter: T) -> Self {
        Mapping(IndexMap::from_iter(iter))
    }
}

impl Serialize for Mapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
