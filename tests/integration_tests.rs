use conftoml::parse::ValueParser;
use conftoml::{
    convert, convert_with_options, from_reader, parse_str, parse_value, to_source, to_string,
    ConstantTable, Error, KeyStyle, Mapping, Options, Value,
};

fn ints(values: &[i64]) -> Value {
    Value::Array(values.iter().copied().map(Value::from).collect())
}

#[test]
fn test_parse_numbers() {
    let constants = ConstantTable::new();
    assert_eq!(parse_value("123", &constants), Ok(Value::from(123)));
    assert_eq!(parse_value("-456", &constants), Ok(Value::from(-456)));
    assert_eq!(parse_value("  +7 ", &constants), Ok(Value::from(7)));
}

#[test]
fn test_parse_simple_array() {
    let constants = ConstantTable::new();
    let parser = ValueParser::new(&constants);
    assert_eq!(parser.parse_array("1,2,3"), Ok(ints(&[1, 2, 3])));
}

#[test]
fn test_parse_simple_mapping() {
    let constants = ConstantTable::new();
    let parser = ValueParser::new(&constants);
    let map = parser.parse_mapping("a=1,b=2").unwrap();
    let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(map.get("b"), Some(&Value::from(2)));
}

#[test]
fn test_flat_root() {
    let output = convert("{a=1,b=2}").unwrap();
    assert_eq!(output, "a = 1\nb = 2");
    assert!(!output.contains('['));
}

#[test]
fn test_constant_reference() {
    assert_eq!(
        convert("def maxconn := 100\n{connections=?[maxconn]}").unwrap(),
        "connections = 100"
    );
}

#[test]
fn test_nested_mapping_becomes_section() {
    let output = convert("{server={port=8080}}").unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "[server]");
    assert!(lines[1].ends_with("port = 8080"));
}

#[test]
fn test_array_value() {
    assert_eq!(convert("{port=<<80>>}").unwrap(), "port = [80]");
}

#[test]
fn test_array_constant() {
    assert_eq!(
        convert("def port := <<80>>\n{listen=?[port]}").unwrap(),
        "listen = [80]"
    );
}

#[test]
fn test_complete_document() {
    let input = "\
; server settings
def workers := 4
def timeout := 30 ; seconds
def ports := <<80, 443>>

{server = {maxworkers = ?[workers], timeout = ?[timeout], listen = ?[ports]}, debug = 0}
";
    let output = convert(input).unwrap();
    assert_eq!(
        output,
        "[server]\n\
         server.maxworkers = 4\n\
         server.timeout = 30\n\
         server.listen = [80, 443]\n\
         debug = 0"
    );
}

#[test]
fn test_complete_document_relative_keys() {
    let input = "def workers := 4\n{server={maxworkers=?[workers],tls={on=1}},debug=0}";
    let options = Options::new().with_key_style(KeyStyle::Relative);
    assert_eq!(
        convert_with_options(input, &options).unwrap(),
        "debug = 0\n\n[server]\nmaxworkers = 4\n\n[server.tls]\non = 1"
    );
}

#[test]
fn test_constant_holds_nested_structures() {
    let input = "def base := {ports=<<80,<<8080,8081>>>>,limits={max=10}}\n{web=?[base],api=?[base]}";
    let root = parse_str(input).unwrap();
    assert_eq!(root.get("web"), root.get("api"));

    let web = root.get("web").and_then(Value::as_mapping).unwrap();
    assert_eq!(web.get("ports").unwrap().to_string(), "[80, [8080, 8081]]");
}

#[test]
fn test_undefined_constant() {
    let err = convert("{x=?[unknown]}").unwrap_err();
    assert_eq!(err, Error::UndefinedConstant("unknown".to_string()));
    assert!(err.to_string().contains("unknown"));
}

#[test]
fn test_invalid_name() {
    let err = convert("{123abc=1}").unwrap_err();
    assert_eq!(err, Error::InvalidName("123abc".to_string()));
    assert_eq!(err.to_string(), "invalid name '123abc'");
}

#[test]
fn test_single_root_is_accepted() {
    assert_eq!(convert("{a=1}").unwrap(), "a = 1");
}

#[test]
fn test_duplicate_root() {
    assert_eq!(
        convert("{a=1}\n{b=2}"),
        Err(Error::DuplicateRoot { line: 2 })
    );
}

#[test]
fn test_missing_root() {
    assert_eq!(convert("def a := 1"), Err(Error::MissingRoot));
}

#[test]
fn test_unterminated_root() {
    let err = convert("{a=1").unwrap_err();
    assert_eq!(err, Error::UnterminatedMapping { line: 1 });
    assert_eq!(
        err.to_string(),
        "line 1: root mapping must be closed on the same line"
    );
}

#[test]
fn test_bare_identifier_suggests_reference() {
    let err = convert("def port := 80\n{x=port}").unwrap_err();
    assert_eq!(err, Error::UnknownIdentifier("port".to_string()));
    assert!(err.to_string().contains("?[port]"));
}

#[test]
fn test_invalid_values() {
    assert_eq!(
        convert("{x=1.5}"),
        Err(Error::InvalidValue("1.5".to_string()))
    );
    assert_eq!(
        convert("{x=<<1,2}"),
        Err(Error::InvalidValue("<<1,2".to_string()))
    );
    assert_eq!(
        convert("{x}"),
        Err(Error::InvalidDefinition("x".to_string()))
    );
    assert_eq!(
        convert("{x=99999999999999999999}"),
        Err(Error::IntegerOutOfRange("99999999999999999999".to_string()))
    );
}

#[test]
fn test_duplicate_keys() {
    let root = parse_str("{a=1,b=2,a=3}").unwrap();
    assert_eq!(to_string(&root), "a = 3\nb = 2");

    let strict = convert_with_options("{a=1,b=2,a=3}", &Options::strict());
    assert_eq!(strict, Err(Error::DuplicateKey("a".to_string())));
}

#[test]
fn test_strict_mode_is_configurable() {
    let options = Options::strict().with_unrecognized_lines(true);
    assert_eq!(
        convert_with_options("garbage\n{a=1}", &options).unwrap(),
        "a = 1"
    );
    assert_eq!(
        convert_with_options("garbage\n{a=1}", &Options::strict()),
        Err(Error::UnrecognizedLine {
            line: 1,
            text: "garbage".to_string()
        })
    );
}

#[test]
fn test_from_reader() {
    let input = "def a := 1\n{x=?[a]}\n";
    let root = from_reader(input.as_bytes()).unwrap();
    assert_eq!(root.get("x"), Some(&Value::from(1)));
}

#[test]
fn test_source_round_trip_keeps_order() {
    let root = parse_str("def z := <<3,2,1>>\n{zeta=?[z],alpha={beta=<<>>,gamma={}}}").unwrap();
    let source = to_source(&root);
    assert_eq!(source, "{zeta=<<3,2,1>>,alpha={beta=<<>>,gamma={}}}");

    let reparsed: Mapping = parse_str(&source).unwrap();
    assert_eq!(reparsed, root);
    assert_eq!(to_string(&reparsed), to_string(&root));
}

#[test]
fn test_serde_interop() {
    let root = parse_str("{a=<<1,2>>,b={c=3}}").unwrap();
    let json = serde_json::to_value(&root).unwrap();
    assert_eq!(json, serde_json::json!({"a": [1, 2], "b": {"c": 3}}));
}
