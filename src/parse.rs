//! Value and mapping parsing.
//!
//! This module provides the [`ValueParser`], which turns a single fragment of
//! source text into a resolved [`Value`]. Fragments are recognized by shape,
//! first match wins:
//!
//! | Form | Shape | Example |
//! |------|-------|---------|
//! | Constant reference | `?[` name `]` | `?[maxconn]` |
//! | Integer | optional sign, ASCII digits | `-42`, `+7` |
//! | Array | `<<` ... `>>` | `<<1, 2, 3>>` |
//! | Mapping | `{` ... `}` | `{port = 80}` |
//!
//! Anything else is an error: a bare lowercase word is reported as
//! [`Error::UnknownIdentifier`] (it was probably meant as a constant
//! reference), everything else as [`Error::InvalidValue`].
//!
//! The parser reads constants from a [`ConstantTable`] it borrows; it never
//! defines constants itself.
//!
//! ## Usage
//!
//! ```rust
//! use conftoml::{ConstantTable, Name, Value};
//! use conftoml::parse::ValueParser;
//!
//! let mut constants = ConstantTable::new();
//! constants.define(Name::new("port").unwrap(), Value::from(80));
//!
//! let parser = ValueParser::new(&constants);
//! let value = parser.parse_value("<<?[port], 443>>").unwrap();
//! assert_eq!(value, Value::from(vec![Value::from(80), Value::from(443)]));
//! ```

use crate::name::is_name;
use crate::split::split_top_level;
use crate::{ConstantTable, Error, Mapping, Name, Options, Result, Value};

const REF_OPEN: &str = "?[";
const REF_CLOSE: &str = "]";
const ARRAY_OPEN: &str = "<<";
const ARRAY_CLOSE: &str = ">>";

/// Parses fragments into values, resolving constant references.
///
/// Created via [`ValueParser::new`] or [`ValueParser::with_options`].
pub struct ValueParser<'a> {
    constants: &'a ConstantTable,
    allow_duplicate_keys: bool,
}

impl<'a> ValueParser<'a> {
    pub fn new(constants: &'a ConstantTable) -> Self {
        ValueParser {
            constants,
            allow_duplicate_keys: true,
        }
    }

    pub fn with_options(constants: &'a ConstantTable, options: &Options) -> Self {
        ValueParser {
            constants,
            allow_duplicate_keys: options.allow_duplicate_keys,
        }
    }

    /// Parses one fragment into a value.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UndefinedConstant`], [`Error::UnknownIdentifier`],
    /// [`Error::InvalidValue`] or [`Error::IntegerOutOfRange`] for this
    /// fragment, or with any mapping error from a nested mapping literal.
    pub fn parse_value(&self, fragment: &str) -> Result<Value> {
        let fragment = fragment.trim();

        if let Some(inner) = strip_delimiters(fragment, REF_OPEN, REF_CLOSE) {
            let name = inner.trim();
            log::trace!("constant reference ?[{}]", name);
            return self
                .constants
                .get(name)
                .cloned()
                .ok_or_else(|| Error::UndefinedConstant(name.to_string()));
        }

        if is_integer_literal(fragment) {
            return fragment
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| Error::IntegerOutOfRange(fragment.to_string()));
        }

        if let Some(inner) = strip_delimiters(fragment, ARRAY_OPEN, ARRAY_CLOSE) {
            return self.parse_array(inner);
        }

        if let Some(inner) = strip_delimiters(fragment, "{", "}") {
            return self.parse_mapping(inner).map(Value::Mapping);
        }

        if is_name(fragment) {
            Err(Error::UnknownIdentifier(fragment.to_string()))
        } else {
            Err(Error::InvalidValue(fragment.to_string()))
        }
    }

    /// Parses the interior of an array literal (without `<<` and `>>`).
    pub fn parse_array(&self, content: &str) -> Result<Value> {
        split_top_level(content)
            .into_iter()
            .map(|fragment| self.parse_value(fragment))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    /// Parses the interior of a mapping literal (without `{` and `}`).
    ///
    /// Each entry is `name=value`, split on the first `=`. Entries keep their
    /// order; a repeated key replaces the earlier value unless duplicate keys
    /// are disallowed.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidDefinition`] for an entry without `=`,
    /// [`Error::InvalidName`] for a bad key, [`Error::DuplicateKey`] in strict
    /// mode, or any error from parsing an entry's value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftoml::{ConstantTable, Error};
    /// use conftoml::parse::ValueParser;
    ///
    /// let constants = ConstantTable::new();
    /// let parser = ValueParser::new(&constants);
    ///
    /// let map = parser.parse_mapping("a=1, b=<<2>>").unwrap();
    /// assert_eq!(map.len(), 2);
    ///
    /// let err = parser.parse_mapping("123abc=1").unwrap_err();
    /// assert_eq!(err, Error::InvalidName("123abc".to_string()));
    /// ```
    pub fn parse_mapping(&self, content: &str) -> Result<Mapping> {
        let mut map = Mapping::new();

        for fragment in split_top_level(content) {
            let (key, value) = fragment
                .split_once('=')
                .ok_or_else(|| Error::InvalidDefinition(fragment.to_string()))?;

            let key = Name::new(key.trim())?;
            let value = self.parse_value(value)?;

            if !self.allow_duplicate_keys && map.contains_key(key.as_str()) {
                return Err(Error::DuplicateKey(key.into_string()));
            }
            map.insert(key, value);
        }

        Ok(map)
    }
}

/// Returns the text between `open` and `close` if `s` starts and ends with them.
fn strip_delimiters<'s>(s: &'s str, open: &str, close: &str) -> Option<&'s str> {
    if s.len() >= open.len() + close.len() {
        s.strip_prefix(open)?.strip_suffix(close)
    } else {
        None
    }
}

/// Optional `+`/`-`, then one or more ASCII digits, nothing else.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
