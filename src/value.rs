//! Resolved value trees.
//!
//! This module provides the [`Value`] enum, the result of parsing a value in
//! the source language. Constant references are already resolved here, so
//! a `Value` is always one of three concrete forms:
//!
//! - [`Value::Integer`]: a signed 64-bit integer
//! - [`Value::Array`]: an ordered sequence of values
//! - [`Value::Mapping`]: an ordered map from [`Name`](crate::Name) to value
//!
//! ## Creating Values
//!
//! ```rust
//! use conftoml::{Mapping, Name, Value};
//!
//! let port = Value::from(8080);
//! let ports = Value::from(vec![Value::from(80), Value::from(443)]);
//!
//! let mut server = Mapping::new();
//! server.insert(Name::new("port").unwrap(), port);
//! let server = Value::from(server);
//!
//! assert!(ports.is_array());
//! assert!(server.is_mapping());
//! ```
//!
//! ## Display
//!
//! `Display` renders the inline TOML form used for array elements:
//!
//! ```rust
//! use conftoml::Value;
//!
//! let value = Value::from(vec![Value::from(1), Value::from(-2)]);
//! assert_eq!(value.to_string(), "[1, -2]");
//! ```

use crate::Mapping;
use serde::{Serialize, Serializer};
use std::fmt;

/// A fully resolved value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Array(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns a short lowercase name for the variant, for messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Array(_) => "array",
            Value::Mapping(_) => "mapping",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        crate::ser::write_inline_value(&mut output, self);
        f.write_str(&output)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Array(arr) => serializer.collect_seq(arr),
            Value::Mapping(map) => map.serialize(serializer),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}
