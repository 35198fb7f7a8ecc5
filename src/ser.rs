//! TOML rendering.
//!
//! This module provides the [`Serializer`] that renders a resolved root
//! [`Mapping`] as TOML text.
//!
//! ## Overview
//!
//! - **Sections**: a mapping that is the value of a key becomes a section
//!   with a dotted header (`[server.tls]`), at any depth
//! - **Assignments**: integers and arrays become `key = value` lines
//! - **Inline values**: arrays render as `[1, 2]`; a mapping inside an array
//!   renders inline as `{a = 1, b = 2}`
//!
//! Keys are written in insertion order. With the default
//! [`KeyStyle::Dotted`] each assignment carries its full dotted path; see
//! [`KeyStyle`] for the alternative.
//!
//! ## Usage
//!
//! ```rust
//! use conftoml::{parse_str, to_string};
//!
//! let root = parse_str("{name=<<1,2>>,db={port=5432}}").unwrap();
//! assert_eq!(to_string(&root), "name = [1, 2]\n\n[db]\ndb.port = 5432");
//! ```

use crate::{KeyStyle, Mapping, Name, Options, Value};

/// Renders a root mapping as TOML text.
///
/// Created via [`Serializer::new`]; the rendered document is returned by
/// [`Serializer::into_inner`].
///
/// # Examples
///
/// ```rust
/// use conftoml::{parse_str, Options, Serializer};
///
/// let root = parse_str("{a={b=1}}").unwrap();
/// let mut serializer = Serializer::new(Options::new().with_section_spacing(false));
/// serializer.serialize_root(&root);
/// assert_eq!(serializer.into_inner(), "[a]\na.b = 1");
/// ```
pub struct Serializer {
    lines: Vec<String>,
    options: Options,
}

impl Serializer {
    pub fn new(options: Options) -> Self {
        Serializer {
            lines: Vec::new(),
            options,
        }
    }

    /// Renders `root` and appends its lines to the output.
    pub fn serialize_root(&mut self, root: &Mapping) {
        match self.options.key_style {
            KeyStyle::Dotted => self.write_dotted(root, ""),
            KeyStyle::Relative => self.write_relative(root, ""),
        }
    }

    /// Returns the document: all lines joined by `\n`, trimmed as a whole.
    pub fn into_inner(self) -> String {
        self.lines.join("\n").trim().to_string()
    }

    fn write_dotted(&mut self, map: &Mapping, prefix: &str) {
        for (key, value) in map {
            let full_key = join_key(prefix, key);
            match value {
                Value::Mapping(nested) => {
                    self.write_header(&full_key);
                    self.write_dotted(nested, &full_key);
                }
                _ => self.write_assignment(&full_key, value),
            }
        }
    }

    // Assignments first, then sub-sections: a bare key after a header would
    // otherwise land in the wrong table.
    fn write_relative(&mut self, map: &Mapping, prefix: &str) {
        for (key, value) in map {
            if !value.is_mapping() {
                self.write_assignment(key.as_str(), value);
            }
        }

        for (key, value) in map {
            if let Value::Mapping(nested) = value {
                let full_key = join_key(prefix, key);
                self.write_header(&full_key);
                self.write_relative(nested, &full_key);
            }
        }
    }

    fn write_header(&mut self, full_key: &str) {
        if self.options.section_spacing {
            self.lines.push(String::new());
        }
        self.lines.push(format!("[{}]", full_key));
    }

    fn write_assignment(&mut self, key: &str, value: &Value) {
        let mut line = String::with_capacity(key.len() + 8);
        line.push_str(key);
        line.push_str(" = ");
        write_inline_value(&mut line, value);
        self.lines.push(line);
    }
}

fn join_key(prefix: &str, key: &Name) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Appends the inline TOML form of `value` to `output`.
///
/// Integers as decimal digits, arrays as `[a, b]` and mappings as
/// `{k = v, k2 = v2}`, recursively.
pub fn write_inline_value(output: &mut String, value: &Value) {
    match value {
        Value::Integer(i) => output.push_str(&i.to_string()),
        Value::Array(arr) => {
            output.push('[');
            for (i, elem) in arr.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                write_inline_value(output, elem);
            }
            output.push(']');
        }
        Value::Mapping(map) => {
            output.push('{');
            for (i, (key, elem)) in map.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                output.push_str(key.as_str());
                output.push_str(" = ");
                write_inline_value(output, elem);
            }
            output.push('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_str;

    fn render(input: &str, options: Options) -> String {
        let root = parse_str(input).unwrap();
        let mut serializer = Serializer::new(options);
        serializer.serialize_root(&root);
        serializer.into_inner()
    }

    #[test]
    fn test_flat_mapping() {
        assert_eq!(render("{a=1,b=2}", Options::new()), "a = 1\nb = 2");
    }

    #[test]
    fn test_nested_sections_use_full_paths() {
        let output = render("{a=1,s={p=2,t={q=3}},b=4}", Options::new());
        assert_eq!(
            output,
            "a = 1\n\n[s]\ns.p = 2\n\n[s.t]\ns.t.q = 3\nb = 4"
        );
    }

    #[test]
    fn test_section_spacing_off() {
        let output = render("{s={t={q=3}}}", Options::new().with_section_spacing(false));
        assert_eq!(output, "[s]\n[s.t]\ns.t.q = 3");
    }

    #[test]
    fn test_empty_documents_and_sections() {
        assert_eq!(render("{}", Options::new()), "");
        assert_eq!(render("{e={}}", Options::new()), "[e]");
        assert_eq!(render("{e={},x=1}", Options::new()), "[e]\nx = 1");
    }

    #[test]
    fn test_relative_keys_put_assignments_first() {
        let output = render(
            "{s={p=2,t={q=3},r=<<1>>},a=1}",
            Options::new().with_key_style(KeyStyle::Relative),
        );
        assert_eq!(output, "a = 1\n\n[s]\np = 2\nr = [1]\n\n[s.t]\nq = 3");
    }

    #[test]
    fn test_inline_values() {
        let mut output = String::new();
        let value = parse_str("{v=<<1,<<>>,{},{a=-1,b=<<2,3>>}>>}").unwrap();
        write_inline_value(&mut output, value.get("v").unwrap());
        assert_eq!(output, "[1, [], {}, {a = -1, b = [2, 3]}]");
    }

    #[test]
    fn test_mapping_in_array_stays_inline() {
        let output = render("{list=<<{a={b=1}}>>}", Options::new());
        assert_eq!(output, "list = [{a = {b = 1}}]");
    }
}
