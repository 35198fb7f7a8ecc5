//! Identifiers for mapping keys and constants.
//!
//! A [`Name`] is one or more lowercase ASCII letters (`a`-`z`) and nothing
//! else. Names are checked when they are created and are never case-folded,
//! so holding a `Name` means the text is already valid.

use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Returns `true` if `s` is a valid name: one or more of `a`-`z`.
///
/// # Examples
///
/// ```rust
/// use conftoml::name::is_name;
///
/// assert!(is_name("port"));
/// assert!(!is_name(""));
/// assert!(!is_name("Port"));
/// assert!(!is_name("max_conn"));
/// ```
#[inline]
#[must_use]
pub fn is_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

/// A validated identifier.
///
/// # Examples
///
/// ```rust
/// use conftoml::Name;
///
/// let name = Name::new("server").unwrap();
/// assert_eq!(name.as_str(), "server");
/// assert!(Name::new("123abc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Creates a name, failing with [`Error::InvalidName`] if `s` is not valid.
    pub fn new(s: &str) -> Result<Self> {
        if is_name(s) {
            Ok(Name(s.to_string()))
        } else {
            Err(Error::InvalidName(s.to_string()))
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for Name {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Name::new(value)
    }
}

impl TryFrom<String> for Name {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if is_name(&value) {
            Ok(Name(value))
        } else {
            Err(Error::InvalidName(value))
        }
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
