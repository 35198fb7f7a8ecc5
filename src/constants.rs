//! The per-session constant table.
//!
//! Constants are bound by `def name := value` lines and read back through
//! `?[name]` references. Values are stored fully resolved, so a lookup hands
//! back a copy of the tree that existed when the constant was defined; later
//! definitions never change earlier references.

use crate::{Name, Value};
use indexmap::IndexMap;

/// Constants defined so far in one parse session, in definition order.
///
/// # Examples
///
/// ```rust
/// use conftoml::{ConstantTable, Name, Value};
///
/// let mut constants = ConstantTable::new();
/// constants.define(Name::new("port").unwrap(), Value::from(8080));
///
/// assert_eq!(constants.get("port"), Some(&Value::from(8080)));
/// assert_eq!(constants.get("host"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    values: IndexMap<Name, Value>,
}

impl ConstantTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the value it replaces, if any.
    ///
    /// A redefined constant keeps its original position in [`iter`](Self::iter).
    pub fn define(&mut self, name: Name, value: Value) -> Option<Value> {
        log::trace!("binding constant {} to {}", name, value.type_name());
        self.values.insert(name, value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over the constants in definition order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Name, Value> {
        self.values.iter()
    }
}
