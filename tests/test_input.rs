use std::fs;

use differences::input::{load_document, parse_document, render, resolve_property, Format};
use differences::Error;
use yaml_rust2::{Yaml, YamlLoader};

fn yaml(s: &str) -> Yaml {
    YamlLoader::load_from_str(s).unwrap().into_iter().next().unwrap()
}

#[test]
fn test_parse_json_document() {
    let doc = parse_document("msg.json", r#"{"left": ["a", 1], "right": {"b": true}}"#).unwrap();
    assert_eq!(doc, yaml("{left: [a, 1], right: {b: true}}"));
}

#[test]
fn test_empty_document_is_absent() {
    assert!(parse_document("empty.yaml", "").unwrap().is_badvalue());
}

#[test]
fn test_parse_error() {
    let err = parse_document("broken.yaml", "a: [1, 2").unwrap_err();
    assert!(matches!(err, Error::Parse { ref path, .. } if path == "broken.yaml"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = load_document("/nonexistent/differences/input.yaml").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_load_document_from_file() {
    let path = std::env::temp_dir().join(format!("differences-test-{}.yaml", std::process::id()));
    fs::write(&path, "payload:\n  - a\n  - b\n").unwrap();
    let doc = load_document(path.to_str().unwrap()).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(doc, yaml("payload: [a, b]"));
}

#[test]
fn test_resolve_property() {
    let doc = yaml("payload:\n  items:\n    - name: x\n    - name: y\nleft: [1]");
    assert_eq!(resolve_property(&doc, ""), &doc);
    assert_eq!(resolve_property(&doc, "left"), &yaml("[1]"));
    assert_eq!(resolve_property(&doc, "payload.items.1.name"), &yaml("y"));
    assert!(resolve_property(&doc, "payload.missing.deeper").is_badvalue());
    assert!(resolve_property(&doc, "payload.items.7").is_badvalue());
}

#[test]
fn test_render_json() {
    let out = render(&yaml("{a: [1, x]}"), Format::Json).unwrap();
    assert_eq!(out, "{\"a\":[1,\"x\"]}\n");
}

#[test]
fn test_render_yaml() {
    let out = render(&yaml("[a, b]"), Format::Yaml).unwrap();
    assert_eq!(out, "- a\n- b\n");
    assert_eq!(yaml(&out), yaml("[a, b]"));
}
