//! The line-oriented document driver.
//!
//! A document is read one physical line at a time. Every line is handled on
//! its own; there are no multi-line literals. For each line:
//!
//! 1. Everything from the first `;` onward is a comment and is dropped, even
//!    inside what looks like a literal.
//! 2. Surrounding whitespace is trimmed and blank lines are skipped.
//! 3. `def name := value` binds a constant.
//! 4. `{ ... }` is the root mapping; it must close on the same line and may
//!    appear only once.
//! 5. Anything else is skipped (or rejected in strict mode).
//!
//! A [`Session`] holds the state of one document: the [`ConstantTable`] and
//! the root mapping once it has been seen.
//!
//! ## Examples
//!
//! ```rust
//! use conftoml::{Options, Session, Value};
//!
//! let mut session = Session::new(Options::new());
//! session.feed_line(1, "def workers := 4 ; per host").unwrap();
//! session.feed_line(2, "{server={workers=?[workers]}}").unwrap();
//!
//! let root = session.finish().unwrap();
//! let server = root.get("server").and_then(Value::as_mapping).unwrap();
//! assert_eq!(server.get("workers"), Some(&Value::from(4)));
//! ```

use crate::parse::ValueParser;
use crate::{ConstantTable, Error, Mapping, Name, Options, Result};

const DEF_PREFIX: &str = "def ";
const DEF_SEPARATOR: &str = " := ";
const COMMENT: char = ';';

/// State of one document being parsed.
#[derive(Debug)]
pub struct Session {
    options: Options,
    constants: ConstantTable,
    root: Option<Mapping>,
}

impl Session {
    /// Starts a session with an empty constant table and no root mapping.
    pub fn new(options: Options) -> Self {
        Session {
            options,
            constants: ConstantTable::new(),
            root: None,
        }
    }

    /// Parses every line of `input` and returns the root mapping.
    ///
    /// Lines are split on `\n` and numbered from 1.
    ///
    /// # Errors
    ///
    /// Returns the first error found; see [`Session::feed_line`] and
    /// [`Session::finish`].
    pub fn parse_document(mut self, input: &str) -> Result<Mapping> {
        for (index, line) in input.split('\n').enumerate() {
            self.feed_line(index + 1, line)?;
        }
        self.finish()
    }

    /// Processes one physical line.
    ///
    /// `number` is the 1-based line number used in error messages.
    ///
    /// # Errors
    ///
    /// Line-level errors ([`Error::InvalidConstantDef`],
    /// [`Error::InvalidConstantName`], [`Error::UnterminatedMapping`],
    /// [`Error::DuplicateRoot`] and the strict-mode errors) carry `number`.
    /// Errors from parsing a value are returned as they are, without a line.
    pub fn feed_line(&mut self, number: usize, raw: &str) -> Result<()> {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            return Ok(());
        }

        if let Some(definition) = line.strip_prefix(DEF_PREFIX) {
            return self.define_constant(number, definition.trim());
        }

        if line.starts_with('{') {
            return self.capture_root(number, line);
        }

        if self.options.skip_unrecognized_lines {
            log::debug!("line {}: skipping unrecognized line: {}", number, line);
            Ok(())
        } else {
            Err(Error::UnrecognizedLine {
                line: number,
                text: line.to_string(),
            })
        }
    }

    /// Ends the session and returns the root mapping.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingRoot`] if no root mapping was seen.
    pub fn finish(self) -> Result<Mapping> {
        self.root.ok_or(Error::MissingRoot)
    }

    /// The constants defined so far.
    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    /// The root mapping, once its line has been processed.
    pub fn root(&self) -> Option<&Mapping> {
        self.root.as_ref()
    }

    fn define_constant(&mut self, line: usize, definition: &str) -> Result<()> {
        let (name, value) = definition
            .split_once(DEF_SEPARATOR)
            .ok_or(Error::InvalidConstantDef { line })?;

        let name = name.trim();
        let name = Name::new(name).map_err(|_| Error::InvalidConstantName {
            line,
            name: name.to_string(),
        })?;

        if !self.options.allow_redefinition && self.constants.contains(name.as_str()) {
            return Err(Error::ConstantRedefined {
                line,
                name: name.into_string(),
            });
        }

        let value =
            ValueParser::with_options(&self.constants, &self.options).parse_value(value)?;
        if let Some(previous) = self.constants.define(name, value) {
            log::debug!(
                "line {}: constant redefined, replacing previous {}",
                line,
                previous.type_name()
            );
        }
        Ok(())
    }

    fn capture_root(&mut self, line: usize, text: &str) -> Result<()> {
        let content = text
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or(Error::UnterminatedMapping { line })?;

        if self.root.is_some() {
            return Err(Error::DuplicateRoot { line });
        }

        let root =
            ValueParser::with_options(&self.constants, &self.options).parse_mapping(content)?;
        log::debug!("line {}: captured root mapping with {} keys", line, root.len());
        self.root = Some(root);
        Ok(())
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(pos) => &line[..pos],
        None => line,
    }
}
