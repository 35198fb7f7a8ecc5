//! # conftoml
//!
//! A translator from a small, line-oriented configuration language into TOML.
//!
//! ## The Language
//!
//! A document holds constant definitions and exactly one root mapping, one
//! per line. `;` starts a comment that runs to the end of the line.
//!
//! ```text
//! ; shared settings
//! def workers := 4
//! def ports := <<80, 443>>
//! {server = {workers = ?[workers], listen = ?[ports]}, debug = 0}
//! ```
//!
//! Values are integers, arrays (`<<1, 2>>`), mappings (`{a = 1}`) and
//! references to earlier constants (`?[name]`). Names are lowercase ASCII
//! letters. See the [`syntax`] module for the full grammar.
//!
//! ## Quick Start
//!
//! ```rust
//! use conftoml::convert;
//!
//! let input = "def workers := 4\n{server={workers=?[workers],listen=<<80,443>>}}";
//! let toml = convert(input).unwrap();
//! assert_eq!(
//!     toml,
//!     "[server]\nserver.workers = 4\nserver.listen = [80, 443]"
//! );
//! ```
//!
//! ### Parsing and Rendering Separately
//!
//! ```rust
//! use conftoml::{parse_str, to_string, Value};
//!
//! let root = parse_str("{port=<<80>>}").unwrap();
//! assert_eq!(root.get("port"), Some(&Value::from(vec![Value::from(80)])));
//! assert_eq!(to_string(&root), "port = [80]");
//! ```
//!
//! ## Pipeline
//!
//! - [`split`]: cuts literal interiors at top-level commas
//! - [`parse`]: turns fragments into [`Value`]s, resolving constants
//! - [`session`]: drives the document line by line and owns the
//!   [`ConstantTable`]
//! - [`ser`]: renders the root [`Mapping`] as TOML
//! - [`source`]: renders a tree back into the source language
//!
//! ## Errors
//!
//! Every failure is an [`Error`]. The first error aborts the conversion and
//! nothing is rendered. Errors found by the line driver carry the line number:
//!
//! ```rust
//! use conftoml::{convert, Error};
//!
//! let err = convert("{a=1\n").unwrap_err();
//! assert_eq!(err, Error::UnterminatedMapping { line: 1 });
//! ```

pub mod constants;
pub mod error;
pub mod map;
pub mod name;
pub mod options;
pub mod parse;
pub mod ser;
pub mod session;
pub mod source;
pub mod split;
pub mod syntax;
pub mod value;

pub use constants::ConstantTable;
pub use error::{Error, Result};
pub use map::Mapping;
pub use name::Name;
pub use options::{KeyStyle, Options};
pub use ser::Serializer;
pub use session::Session;
pub use source::to_source;
pub use value::Value;

use std::io;

/// Parse a document and return its root mapping.
///
/// # Examples
///
/// ```rust
/// use conftoml::{parse_str, Value};
///
/// let root = parse_str("def maxconn := 100\n{connections=?[maxconn]}").unwrap();
/// assert_eq!(root.get("connections"), Some(&Value::from(100)));
/// ```
///
/// # Errors
///
/// Returns the first error in the document.
pub fn parse_str(input: &str) -> Result<Mapping> {
    parse_str_with_options(input, &Options::default())
}

/// Parse a document with custom options.
///
/// # Examples
///
/// ```rust
/// use conftoml::{parse_str_with_options, Error, Options};
///
/// let err = parse_str_with_options("{a=1,a=2}", &Options::strict()).unwrap_err();
/// assert_eq!(err, Error::DuplicateKey("a".to_string()));
/// ```
///
/// # Errors
///
/// Returns the first error in the document.
pub fn parse_str_with_options(input: &str, options: &Options) -> Result<Mapping> {
    Session::new(options.clone()).parse_document(input)
}

/// Parse a document read from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use conftoml::from_reader;
/// use std::io::Cursor;
///
/// let root = from_reader(Cursor::new(b"{a=1}")).unwrap();
/// assert_eq!(root.len(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the input is not UTF-8, and any
/// parse error otherwise.
pub fn from_reader<R>(mut reader: R) -> Result<Mapping>
where
    R: io::Read,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    parse_str(&string)
}

/// Parse a single value against an existing set of constants.
///
/// # Examples
///
/// ```rust
/// use conftoml::{parse_value, ConstantTable, Name, Value};
///
/// let mut constants = ConstantTable::new();
/// constants.define(Name::new("x").unwrap(), Value::from(1));
/// let value = parse_value("<<?[x], 2>>", &constants).unwrap();
/// assert_eq!(value.to_string(), "[1, 2]");
/// ```
///
/// # Errors
///
/// Returns an error if the fragment is not a valid value or references an
/// undefined constant.
pub fn parse_value(fragment: &str, constants: &ConstantTable) -> Result<Value> {
    parse::ValueParser::new(constants).parse_value(fragment)
}

/// Render a root mapping as TOML text.
///
/// # Examples
///
/// ```rust
/// use conftoml::{parse_str, to_string};
///
/// let root = parse_str("{server={port=8080}}").unwrap();
/// assert_eq!(to_string(&root), "[server]\nserver.port = 8080");
/// ```
#[must_use]
pub fn to_string(root: &Mapping) -> String {
    to_string_with_options(root, &Options::default())
}

/// Render a root mapping as TOML text with custom options.
#[must_use]
pub fn to_string_with_options(root: &Mapping, options: &Options) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize_root(root);
    serializer.into_inner()
}

/// Render a root mapping as TOML text to a writer.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W>(writer: W, root: &Mapping) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, root, &Options::default())
}

/// Render a root mapping as TOML text to a writer with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer_with_options<W>(mut writer: W, root: &Mapping, options: &Options) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(root, options);
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Convert a whole document to TOML text.
///
/// # Errors
///
/// Returns the first error in the document; nothing is rendered on failure.
pub fn convert(input: &str) -> Result<String> {
    convert_with_options(input, &Options::default())
}

/// Convert a whole document to TOML text with custom options.
///
/// # Errors
///
/// Returns the first error in the document; nothing is rendered on failure.
pub fn convert_with_options(input: &str, options: &Options) -> Result<String> {
    let root = parse_str_with_options(input, options)?;
    Ok(to_string_with_options(&root, options))
}
