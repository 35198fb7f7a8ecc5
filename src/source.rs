//! Rendering value trees back into the source language.
//!
//! [`to_source`] writes a root mapping as a single root line that parses back
//! to the same tree. Constants are never produced; every value is written out
//! literally.
//!
//! ```rust
//! use conftoml::{parse_str, to_source};
//!
//! let root = parse_str("def p := 80\n{ports = <<?[p], 443>>, tls = {on = 1}}").unwrap();
//! let source = to_source(&root);
//! assert_eq!(source, "{ports=<<80,443>>,tls={on=1}}");
//! assert_eq!(parse_str(&source).unwrap(), root);
//! ```

use crate::{Mapping, Value};

/// Renders `root` as one root-mapping line.
#[must_use]
pub fn to_source(root: &Mapping) -> String {
    let mut output = String::new();
    write_mapping(&mut output, root);
    output
}

/// Renders a single value in source syntax.
#[must_use]
pub fn value_to_source(value: &Value) -> String {
    let mut output = String::new();
    write_value(&mut output, value);
    output
}

fn write_value(output: &mut String, value: &Value) {
    match value {
        Value::Integer(i) => output.push_str(&i.to_string()),
        Value::Array(arr) => {
            output.push_str("<<");
            for (i, elem) in arr.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_value(output, elem);
            }
            output.push_str(">>");
        }
        Value::Mapping(map) => write_mapping(output, map),
    }
}

fn write_mapping(output: &mut String, map: &Mapping) {
    output.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push_str(key.as_str());
        output.push('=');
        write_value(output, value);
    }
    output.push('}');
}
