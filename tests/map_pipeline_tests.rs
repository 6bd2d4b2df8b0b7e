//! End-to-end tests for the map pipeline: JSON source file in, one
//! environment's KV document out.

use appcs_convert::env::Environment;
use appcs_convert::error::ConvertError;
use appcs_convert::pipeline::run_map_file;
use appcs_convert::types::KvDocument;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a JSON source into a fresh temp dir and return (dir, source path).
fn setup_source(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let source = dir.path().join("appcskey.json");
    std::fs::write(&source, json).expect("failed to write source fixture");
    (dir, source)
}

fn convert(json: &str, env: Environment) -> KvDocument {
    let (dir, source) = setup_source(json);
    let output = dir.path().join("out.json");
    run_map_file(&source, env, &output).expect("conversion should succeed");
    let text = std::fs::read_to_string(&output).expect("output should exist");
    KvDocument::from_json(&text).expect("output should be a valid document")
}

#[test]
fn resolves_defaults_overrides_and_suppressions() {
    // The canonical scenario: A has only a bare scalar, B has a default with
    // a dev override, C is explicitly suppressed for dev.
    let json = r#"{"A": "1", "B": {"value": "2", "dev": "3"}, "C": {"dev": null, "value": "4"}}"#;

    let doc = convert(json, Environment::Dev);
    let keys: Vec<&str> = doc.items.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, ["A", "B"], "C must be omitted for dev");
    assert_eq!(doc.items[0].value, "1");
    assert_eq!(doc.items[1].value, "3", "dev override must win over default");

    // For any other environment C's default applies and B falls back.
    let doc = convert(json, Environment::Prod);
    let keys: Vec<&str> = doc.items.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, ["A", "B", "C"]);
    assert_eq!(doc.items[1].value, "2");
    assert_eq!(doc.items[2].value, "4");
}

#[test]
fn bare_scalars_are_environment_invariant() {
    let json = r#"{"conn": "server=db;port=5432"}"#;
    for env in Environment::ALL {
        let doc = convert(json, env);
        assert_eq!(doc.items.len(), 1, "scalar entry must resolve for {env}");
        assert_eq!(doc.items[0].value, "server=db;port=5432");
        assert_eq!(doc.items[0].content_type, "");
    }
}

#[test]
fn kv_reference_override_wraps_value() {
    let json = r#"{"secret": {"dev": {"value": "x", "type": "kv-reference"}}}"#;
    let doc = convert(json, Environment::Dev);
    assert_eq!(doc.items.len(), 1);
    assert_eq!(doc.items[0].value, r#"{"uri":"x"}"#);
    assert_eq!(
        doc.items[0].content_type,
        "application/vnd.microsoft.appconfig.keyvaultref+json;charset=utf-8"
    );

    // Round-trip: parsing the value back recovers the original uri.
    let wrapped: serde_json::Value = serde_json::from_str(&doc.items[0].value).unwrap();
    assert_eq!(wrapped["uri"], "x");
}

#[test]
fn unresolvable_keys_are_skipped_not_errors() {
    // "orphan" has neither a default nor a field for the requested env.
    let json = r#"{"orphan": {"stage": "s"}, "kept": "v"}"#;
    let doc = convert(json, Environment::Dev);
    let keys: Vec<&str> = doc.items.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, ["kept"]);
}

#[test]
fn numeric_and_boolean_scalars_coerce_to_strings() {
    let json = r#"{"port": 5432, "enabled": true, "ratio": 0.5}"#;
    let doc = convert(json, Environment::Test);
    let values: Vec<&str> = doc.items.iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, ["5432", "true", "0.5"]);
}

#[test]
fn items_follow_source_document_order() {
    let json = r#"{"zebra": "1", "apple": "2", "mango": {"value": "3"}}"#;
    let doc = convert(json, Environment::Dev);
    let keys: Vec<&str> = doc.items.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, ["zebra", "apple", "mango"]);
}

#[test]
fn output_items_carry_null_label_and_empty_tags() {
    let (dir, source) = setup_source(r#"{"a": "1"}"#);
    let output = dir.path().join("out.json");
    run_map_file(&source, Environment::Dev, &output).unwrap();
    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("\"label\": null"));
    assert!(text.contains("\"tags\": {}"));
}

#[test]
fn missing_source_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = run_map_file(
        &dir.path().join("nope.json"),
        Environment::Dev,
        &dir.path().join("out.json"),
    )
    .unwrap_err();
    assert!(matches!(err, ConvertError::SourceRead { .. }));
}

#[test]
fn malformed_source_reports_line_and_column() {
    let (dir, source) = setup_source("{\n  \"a\": \"1\",\n  \"b\": ,\n}");
    let err = run_map_file(&source, Environment::Dev, &dir.path().join("out.json")).unwrap_err();
    let ConvertError::SourceParse { line, column, .. } = err else {
        panic!("expected SourceParse, got {err}");
    };
    assert_eq!(line, 3, "locator should point at the bad entry's line");
    assert!(column > 0);
}
