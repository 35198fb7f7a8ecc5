//! Error types for parsing and converting configuration documents.
//!
//! Every failure is reported through the single [`Error`] enum. The variant
//! tells you what went wrong:
//!
//! - **Value errors** come from the value and mapping parsers. They are reached
//!   through recursion and carry only the offending fragment text.
//! - **Line errors** come from the line driver and carry the 1-based line
//!   number where the problem was found.
//! - **Document errors** describe the document as a whole (no root mapping).
//!
//! The first error aborts the whole parse; there is no partial output.
//!
//! ## Examples
//!
//! ```rust
//! use conftoml::{parse_str, Error};
//!
//! let err = parse_str("{a=1}\n{b=2}").unwrap_err();
//! assert!(matches!(err, Error::DuplicateRoot { line: 2 }));
//! assert_eq!(err.line(), Some(2));
//!
//! let err = parse_str("{x=?[unknown]}").unwrap_err();
//! assert_eq!(err, Error::UndefinedConstant("unknown".to_string()));
//! assert_eq!(err.line(), None);
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A `?[name]` reference to a constant that has not been defined yet.
    #[error("undefined constant: {0}")]
    UndefinedConstant(String),

    /// A bare identifier used as a value instead of a `?[name]` reference.
    #[error("unknown identifier: {0}\nHelp: reference constants as ?[{0}]")]
    UnknownIdentifier(String),

    /// A fragment that matches none of the value forms.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An integer literal that does not fit in 64 bits.
    #[error("integer out of range: {0}")]
    IntegerOutOfRange(String),

    /// A mapping entry without an `=` separator.
    #[error("invalid definition: {0}")]
    InvalidDefinition(String),

    /// A mapping key that is not one or more lowercase ASCII letters.
    #[error("invalid name '{0}'")]
    InvalidName(String),

    /// A key assigned twice in one mapping (strict mode only).
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),

    /// A `def` line without the ` := ` separator.
    #[error("line {line}: invalid constant definition\nHelp: write 'def name := value'")]
    InvalidConstantDef { line: usize },

    /// A `def` line whose constant name is not valid.
    #[error("line {line}: invalid constant name '{name}'")]
    InvalidConstantName { line: usize, name: String },

    /// A constant defined twice (strict mode only).
    #[error("line {line}: constant '{name}' is already defined")]
    ConstantRedefined { line: usize, name: String },

    /// A root mapping that does not close on its own line.
    #[error("line {line}: root mapping must be closed on the same line")]
    UnterminatedMapping { line: usize },

    /// A second root mapping.
    #[error("line {line}: only one root mapping is allowed")]
    DuplicateRoot { line: usize },

    /// A line that is neither a definition nor a root mapping (strict mode only).
    #[error("line {line}: unrecognized line: {text}")]
    UnrecognizedLine { line: usize, text: String },

    /// The document contains no root mapping.
    #[error("missing root mapping")]
    MissingRoot,

    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Returns the 1-based line number for errors raised by the line driver.
    ///
    /// Value-level errors and [`Error::MissingRoot`] have no line number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftoml::Error;
    ///
    /// assert_eq!(Error::UnterminatedMapping { line: 3 }.line(), Some(3));
    /// assert_eq!(Error::InvalidName("X".to_string()).line(), None);
    /// ```
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::InvalidConstantDef { line }
            | Error::InvalidConstantName { line, .. }
            | Error::ConstantRedefined { line, .. }
            | Error::UnterminatedMapping { line }
            | Error::DuplicateRoot { line }
            | Error::UnrecognizedLine { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_level_errors_report_line() {
        assert_eq!(Error::InvalidConstantDef { line: 1 }.line(), Some(1));
        assert_eq!(
            Error::InvalidConstantName {
                line: 4,
                name: "A".to_string()
            }
            .line(),
            Some(4)
        );
        assert_eq!(Error::DuplicateRoot { line: 7 }.line(), Some(7));
    }

    #[test]
    fn test_value_errors_have_no_line() {
        assert_eq!(Error::UndefinedConstant("x".to_string()).line(), None);
        assert_eq!(Error::InvalidValue("@".to_string()).line(), None);
        assert_eq!(Error::MissingRoot.line(), None);
    }

    #[test]
    fn test_messages() {
        let err = Error::UnterminatedMapping { line: 2 };
        assert!(err.to_string().starts_with("line 2:"));

        let err = Error::UnknownIdentifier("port".to_string());
        assert!(err.to_string().contains("?[port]"));

        let err = Error::InvalidName("123abc".to_string());
        assert_eq!(err.to_string(), "invalid name '123abc'");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("gone")));
    }
}
