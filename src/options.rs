//! Configuration options for parsing and rendering.
//!
//! This module provides types to customize a conversion:
//!
//! - [`Options`]: Main configuration struct
//! - [`KeyStyle`]: How keys are written inside TOML sections
//!
//! The defaults reproduce the permissive behavior of the language: repeated
//! keys and redefined constants silently overwrite, unknown lines are skipped,
//! and keys are written with their full dotted path.
//!
//! ## Examples
//!
//! ```rust
//! use conftoml::{convert_with_options, KeyStyle, Options};
//!
//! let input = "{server={port=8080}}";
//!
//! let dotted = convert_with_options(input, &Options::new()).unwrap();
//! assert_eq!(dotted, "[server]\nserver.port = 8080");
//!
//! let relative = Options::new().with_key_style(KeyStyle::Relative);
//! let toml = convert_with_options(input, &relative).unwrap();
//! assert_eq!(toml, "[server]\nport = 8080");
//! ```

/// How keys are written for pairs that live inside a section.
///
/// - **Dotted**: Default. Every pair is written with its full dotted path
///   (`server.port = 8080` under `[server]`), in insertion order.
/// - **Relative**: Pairs are written with their bare key, and each mapping's
///   pairs come before its sub-sections, so the text reads back as the same
///   tree in any TOML parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyStyle {
    #[default]
    Dotted,
    Relative,
}

/// Configuration options for a conversion.
///
/// # Examples
///
/// ```rust
/// use conftoml::{KeyStyle, Options};
///
/// // Permissive defaults
/// let options = Options::new();
/// assert!(options.allow_duplicate_keys);
///
/// // Reject everything the defaults silently accept
/// let options = Options::strict();
/// assert!(!options.allow_redefinition);
///
/// // Custom configuration
/// let options = Options::new()
///     .with_key_style(KeyStyle::Relative)
///     .with_section_spacing(false);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// A key repeated inside one mapping overwrites the earlier value.
    pub allow_duplicate_keys: bool,
    /// A second `def` of the same name overwrites the constant.
    pub allow_redefinition: bool,
    /// Lines that are neither definitions nor the root mapping are ignored.
    pub skip_unrecognized_lines: bool,
    pub key_style: KeyStyle,
    /// Emit a blank line before each section header.
    pub section_spacing: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            allow_duplicate_keys: true,
            allow_redefinition: true,
            skip_unrecognized_lines: true,
            key_style: KeyStyle::default(),
            section_spacing: true,
        }
    }
}

impl Options {
    /// Creates the default, permissive options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftoml::{KeyStyle, Options};
    ///
    /// let options = Options::new();
    /// assert_eq!(options.key_style, KeyStyle::Dotted);
    /// assert!(options.section_spacing);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject duplicate keys, constant redefinition and
    /// unrecognized lines.
    #[must_use]
    pub fn strict() -> Self {
        Options {
            allow_duplicate_keys: false,
            allow_redefinition: false,
            skip_unrecognized_lines: false,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_duplicate_keys(mut self, allow: bool) -> Self {
        self.allow_duplicate_keys = allow;
        self
    }

    #[must_use]
    pub fn with_redefinition(mut self, allow: bool) -> Self {
        self.allow_redefinition = allow;
        self
    }

    #[must_use]
    pub fn with_unrecognized_lines(mut self, skip: bool) -> Self {
        self.skip_unrecognized_lines = skip;
        self
    }

    /// Sets how keys inside sections are written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftoml::{KeyStyle, Options};
    ///
    /// let options = Options::new().with_key_style(KeyStyle::Relative);
    /// assert_eq!(options.key_style, KeyStyle::Relative);
    /// ```
    #[must_use]
    pub fn with_key_style(mut self, key_style: KeyStyle) -> Self {
        self.key_style = key_style;
        self
    }

    #[must_use]
    pub fn with_section_spacing(mut self, spacing: bool) -> Self {
        self.section_spacing = spacing;
        self
    }
}
