//! Schema API coverage: inference, parsing, validation, and agreement
//! between standalone inference and the table encoder.

use serde_slim::{
    decode, encode, infer_schema, parse_schema, slim, validate_schema, ColumnType, SlimValue,
};

#[test]
fn test_infer_schema_empty_input() {
    assert_eq!(infer_schema(&[]), "");
}

#[test]
fn test_infer_schema_basic_types() {
    let rows = vec![slim!({
        "id": 1,
        "name": "Mario",
        "active": true,
        "tags": ["a"],
        "meta": {"x": 1}
    })];
    assert_eq!(infer_schema(&rows), "id#,name$,active?,tags@,meta~");
}

#[test]
fn test_infer_schema_marks_nullable() {
    let rows = vec![slim!({"id": 1}), slim!({"id": 2, "score": null})];
    let schema = infer_schema(&rows);
    assert!(schema.contains("score"));
    assert!(schema.ends_with('!'));
}

#[test]
fn test_infer_schema_agrees_with_table_encoding() {
    // The header's schema section must be exactly what infer_schema returns;
    // both run the same routine.
    let rows = vec![
        slim!({"id": 1, "name": "Mario"}),
        slim!({"id": 2, "note": "hidden"}),
    ];
    let schema = infer_schema(&rows);

    let encoded = encode(&SlimValue::Array(rows));
    let header_schema = encoded
        .strip_prefix("|2|")
        .and_then(|rest| rest.split('|').next())
        .unwrap();
    assert_eq!(header_schema, schema);
}

#[test]
fn test_infer_schema_first_occurrence_order_depends_on_rows() {
    let forward = vec![slim!({"a": 1}), slim!({"b": 2})];
    let reverse = vec![slim!({"b": 2}), slim!({"a": 1})];
    assert_eq!(infer_schema(&forward), "a#!,b#!");
    assert_eq!(infer_schema(&reverse), "b#!,a#!");
}

#[test]
fn test_parse_schema_entries() {
    let columns = parse_schema("id#,name$,active?,tags@!,meta~");
    assert_eq!(columns.len(), 5);
    assert_eq!(columns[0].name, "id");
    assert_eq!(columns[0].ty, ColumnType::Number);
    assert!(!columns[0].nullable);
    assert_eq!(columns[3].ty, ColumnType::List);
    assert!(columns[3].nullable);
    assert_eq!(columns[4].ty, ColumnType::Record);
}

#[test]
fn test_parse_schema_untyped_entry_defaults_to_text() {
    let columns = parse_schema("free");
    assert_eq!(columns[0].ty, ColumnType::Text);
    assert!(!columns[0].nullable);
    assert_eq!(columns[0].name, "free");
}

#[test]
fn test_parse_schema_empty_string() {
    assert!(parse_schema("").is_empty());
}

#[test]
fn test_validate_single_missing_field() {
    let report = validate_schema(&slim!([{"id": 1}]), "id#,name$");
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path, "[0].name");
    assert_eq!(report.errors[0].message, "Missing required field");
}

#[test]
fn test_validate_single_record_uses_bare_paths() {
    let report = validate_schema(&slim!({"id": "oops"}), "id#");
    assert!(!report.valid);
    assert_eq!(report.errors[0].path, "id");
    assert_eq!(report.errors[0].message, "Type mismatch");
    assert_eq!(report.errors[0].expected.as_deref(), Some("number"));
    assert_eq!(report.errors[0].actual.as_deref(), Some("string"));
}

#[test]
fn test_validate_accumulates_all_errors() {
    let data = slim!([
        {"name": 7},
        {"id": 1, "name": "ok"},
        {"id": true}
    ]);
    let report = validate_schema(&data, "id#,name$");
    assert!(!report.valid);
    // Row 0: missing id, name wrong type. Row 2: id wrong type, missing name.
    assert_eq!(report.errors.len(), 4);
    let paths: Vec<_> = report.errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["[0].id", "[0].name", "[2].id", "[2].name"]);
}

#[test]
fn test_validate_nullable_column_accepts_missing_and_null() {
    let data = slim!([{"id": 1}, {"id": 2, "score": null}]);
    let report = validate_schema(&data, "id#,score#!");
    assert!(report.valid);
    assert!(report.errors.is_empty());
}

#[test]
fn test_validate_rejects_scalar_input() {
    let report = validate_schema(&slim!("nope"), "id#");
    assert!(!report.valid);
    assert_eq!(report.errors[0].message, "Expected object or array of objects");
}

#[test]
fn test_validate_rejects_non_record_array_element() {
    let report = validate_schema(&slim!([{"id": 1}, 5]), "id#");
    assert!(!report.valid);
    assert_eq!(report.errors[0].path, "[1]");
}

#[test]
fn test_validate_against_inferred_schema_is_clean() {
    let rows = vec![
        slim!({"id": 1, "name": "Mario", "score": null}),
        slim!({"id": 2, "name": "Luigi", "score": 10}),
    ];
    let schema = infer_schema(&rows);
    let report = validate_schema(&SlimValue::Array(rows), &schema);
    assert!(report.valid, "errors: {:?}", report.errors);
}

#[test]
fn test_decoded_table_validates_against_its_own_schema() {
    let text = "|2|id#,name$,score#!|\n1,Mario,\n2,Luigi,10";
    let value = decode(text).unwrap();
    let report = validate_schema(&value, "id#,name$,score#!");
    assert!(report.valid, "errors: {:?}", report.errors);
}
