//! Depth-aware splitting of literal interiors.
//!
//! Array and mapping literals share one splitter. It walks the interior of a
//! literal and cuts it at commas that are not nested inside another literal.
//! Nesting is tracked with a single depth counter:
//!
//! - `{` and `}` raise and lower the depth.
//! - `<<` and `>>` are two-character tokens that raise and lower the depth.
//!   A lone `<` or `>` is ordinary text.
//!
//! Everything that is not a top-level comma stays in the fragment verbatim;
//! the splitter does not validate what it passes through.
//!
//! ```rust
//! use conftoml::split::split_top_level;
//!
//! assert_eq!(split_top_level("a=<<1,2>>,b=3"), vec!["a=<<1,2>>", "b=3"]);
//! assert_eq!(split_top_level("x={a=1,b=2}, y=3"), vec!["x={a=1,b=2}", "y=3"]);
//! assert!(split_top_level("   ").is_empty());
//! ```

/// An angle bracket waiting for its partner to form `<<` or `>>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    None,
    Open,
    Close,
}

/// Splits `span` into trimmed fragments at commas of nesting depth zero.
///
/// Empty fragments are dropped, so an empty span yields an empty vector and
/// `1,,2` yields `["1", "2"]`. Each run of angle brackets pairs up from the
/// left: `<<<<` opens two levels and `<<<` opens one level followed by a
/// literal `<`.
#[must_use]
pub fn split_top_level(span: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut depth: isize = 0;
    let mut start = 0;
    let mut pending = Pending::None;

    for (pos, ch) in span.char_indices() {
        pending = match (ch, pending) {
            ('<', Pending::Open) => {
                depth += 1;
                Pending::None
            }
            ('<', _) => Pending::Open,
            ('>', Pending::Close) => {
                depth -= 1;
                Pending::None
            }
            ('>', _) => Pending::Close,
            ('{', _) => {
                depth += 1;
                Pending::None
            }
            ('}', _) => {
                depth -= 1;
                Pending::None
            }
            (',', _) if depth == 0 => {
                push_fragment(&mut fragments, &span[start..pos]);
                start = pos + 1;
                Pending::None
            }
            _ => Pending::None,
        };
    }

    push_fragment(&mut fragments, &span[start..]);
    fragments
}

fn push_fragment<'a>(fragments: &mut Vec<&'a str>, raw: &'a str) {
    let fragment = raw.trim();
    if !fragment.is_empty() {
        fragments.push(fragment);
    }
}
