//! Checks the rendered text against a real TOML parser.

use conftoml::{parse_str, to_string, to_string_with_options, KeyStyle, Mapping, Options};
use proptest::prelude::*;

fn relative() -> Options {
    Options::new().with_key_style(KeyStyle::Relative)
}

fn load(text: &str) -> toml::Value {
    toml::Value::Table(text.parse::<toml::Table>().unwrap())
}

fn expected(root: &Mapping) -> toml::Value {
    toml::Value::try_from(root).unwrap()
}

#[test]
fn test_relative_output_reads_back() {
    let input = "def ports := <<80, 443>>\n\
                 {name=1,server={listen=?[ports],tls={on=1,ciphers=<<<<1,2>>,<<3>>>>}},\
                 hosts=<<{id=1},{id=2,tags={}}>>,empty={}}";
    let root = parse_str(input).unwrap();
    let text = to_string_with_options(&root, &relative());
    assert_eq!(load(&text), expected(&root));
}

#[test]
fn test_relative_output_without_spacing_reads_back() {
    let root = parse_str("{a={b={c=1},d=2},e=3}").unwrap();
    let text = to_string_with_options(&root, &relative().with_section_spacing(false));
    assert_eq!(text, "e = 3\n[a]\nd = 2\n[a.b]\nc = 1");
    assert_eq!(load(&text), expected(&root));
}

#[test]
fn test_dotted_output_is_valid_toml() {
    let root = parse_str("{server={port=8080,hosts=<<1,2>>}}").unwrap();
    let text = to_string(&root);
    assert_eq!(text, "[server]\nserver.port = 8080\nserver.hosts = [1, 2]");

    // Each dotted key is read relative to its section header.
    let loaded = load(&text);
    assert_eq!(
        loaded["server"]["server"]["port"],
        toml::Value::Integer(8080)
    );
}

#[test]
fn test_flat_output_matches_in_both_styles() {
    let root = parse_str("{a=1,b=<<2,3>>}").unwrap();
    assert_eq!(to_string(&root), to_string_with_options(&root, &relative()));
    assert_eq!(load(&to_string(&root)), expected(&root));
}

mod generated {
    use super::*;

    fn name() -> impl Strategy<Value = conftoml::Name> {
        "[a-z]{1,5}".prop_map(|s| conftoml::Name::new(&s).unwrap())
    }

    fn mapping_of(
        value: impl Strategy<Value = conftoml::Value>,
    ) -> impl Strategy<Value = Mapping> {
        prop::collection::vec((name(), value), 0..4)
            .prop_map(|entries| entries.into_iter().collect())
    }

    fn value() -> impl Strategy<Value = conftoml::Value> {
        let leaf = any::<i64>().prop_map(conftoml::Value::Integer);
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(conftoml::Value::Array),
                mapping_of(inner).prop_map(conftoml::Value::Mapping),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_relative_output_reads_back(root in mapping_of(value())) {
            let text = to_string_with_options(&root, &relative());
            prop_assert_eq!(load(&text), expected(&root));
        }
    }
}
