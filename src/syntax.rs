//! Language Reference
//!
//! This module documents the configuration language accepted by this library
//! and the TOML text it produces.
//!
//! # Overview
//!
//! The language describes one tree of integers, arrays and mappings. Shared
//! values are written once as named constants and referenced from the tree.
//! The result is rendered as TOML with one section per nested mapping.
//!
//! # Documents
//!
//! A document is processed one physical line at a time:
//!
//! | Line | Meaning |
//! |------|---------|
//! | `def name := value` | Bind the constant `name` |
//! | `{ ... }` | The root mapping |
//! | blank, or only a comment | Ignored |
//! | anything else | Ignored (rejected with [`Options::strict`]) |
//!
//! **Rules**:
//! - `;` starts a comment that runs to the end of the line. It is cut before
//!   anything else happens, even inside a literal.
//! - Literals never span lines. The root mapping must end with `}` on the
//!   line it starts on.
//! - Exactly one root mapping is allowed, and it is required.
//! - A constant must be defined on an earlier line than any reference to it.
//!
//! ```text
//! ; limits
//! def maxconn := 100
//! def ports := <<80, 443>>
//! {server = {connections = ?[maxconn], listen = ?[ports]}}
//! ```
//!
//! # Values
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Integer | Optional `+` or `-`, then decimal digits | `-42` |
//! | Array | Comma-separated values in `<<` `>>` | `<<1, <<2>>>>` |
//! | Mapping | Comma-separated `name = value` in `{` `}` | `{a = 1}` |
//! | Reference | A constant name in `?[` `]` | `?[maxconn]` |
//!
//! **Rules**:
//! - Integers are signed 64-bit; anything larger is an error.
//! - Whitespace around values, names and separators is insignificant.
//! - Empty entries between commas are dropped, so `<<1,,2,>>` is `<<1, 2>>`.
//! - A reference is replaced by a copy of the constant's value when the line
//!   is read. Redefining the constant later does not change earlier copies.
//! - A repeated key in one mapping keeps its first position and its last
//!   value (rejected with [`Options::strict`]).
//!
//! ## Names
//!
//! Names of constants and mapping keys are one or more lowercase ASCII
//! letters (`a`-`z`). Digits, underscores and uppercase letters are not
//! allowed.
//!
//! ## Splitting
//!
//! Inside `<< >>` and `{ }` entries are split on commas that are not nested in
//! another literal. `<<` opens a level, `>>` closes one, and `{` `}` do the
//! same. A single `<` or `>` does not change the nesting.
//!
//! # Output
//!
//! The root mapping is rendered as TOML:
//!
//! - Integer and array values become `key = value` lines.
//! - A mapping value becomes a section header `[path]`, where `path` joins
//!   the keys from the root with `.`; its pairs follow the header.
//! - Arrays render as `[1, 2]`. A mapping inside an array renders inline as
//!   `{a = 1, b = 2}`.
//! - Pairs appear in insertion order. Sections are preceded by a blank line
//!   and the document has no leading or trailing whitespace.
//!
//! By default every pair inside a section is written with its full dotted
//! path:
//!
//! ```text
//! [server]
//! server.connections = 100
//! server.listen = [80, 443]
//! ```
//!
//! With [`KeyStyle::Relative`] pairs use their bare key and come before any
//! sub-section, which makes the output read back as the same tree in a TOML
//! parser:
//!
//! ```text
//! [server]
//! connections = 100
//! listen = [80, 443]
//! ```
//!
//! # Errors
//!
//! The first error stops the conversion and no output is produced. Errors
//! about the shape of a line carry its number; errors inside a value do not.
//! See [`Error`] for the full list.
//!
//! [`Options::strict`]: crate::Options::strict
//! [`KeyStyle::Relative`]: crate::KeyStyle::Relative
//! [`Error`]: crate::Error
