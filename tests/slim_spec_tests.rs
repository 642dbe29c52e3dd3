//! Exact wire-format assertions: one test per literal form and format
//! selection rule, checking the emitted text character for character.

use serde_slim::{decode, encode, encode_with_options, slim, EncodeOptions, SlimValue};

#[test]
fn test_primitive_literals() {
    assert_eq!(encode(&SlimValue::Null), "!null");
    assert_eq!(encode(&SlimValue::Undefined), "!undef");
    assert_eq!(encode(&SlimValue::Bool(true)), "?T");
    assert_eq!(encode(&SlimValue::Bool(false)), "?F");
    assert_eq!(encode(&SlimValue::from(42)), "#42");
    assert_eq!(encode(&SlimValue::from(-7)), "#-7");
    assert_eq!(encode(&SlimValue::from(3.5)), "#3.5");
}

#[test]
fn test_special_number_literals() {
    assert_eq!(encode(&SlimValue::from(f64::NAN)), "#NaN");
    assert_eq!(encode(&SlimValue::from(f64::INFINITY)), "#Inf");
    assert_eq!(encode(&SlimValue::from(f64::NEG_INFINITY)), "#-Inf");
}

#[test]
fn test_whole_floats_collapse_to_integer_text() {
    assert_eq!(encode(&SlimValue::from(1000.0)), "#1000");
    assert_eq!(encode(&SlimValue::from(-2.0)), "#-2");
}

#[test]
fn test_plain_text_is_raw() {
    assert_eq!(encode(&SlimValue::from("hello")), "hello");
    assert_eq!(encode(&SlimValue::from("hello world")), "hello world");
}

#[test]
fn test_empty_text_is_always_quoted() {
    assert_eq!(encode(&SlimValue::from("")), "\"\"");
}

#[test]
fn test_text_with_structural_or_marker_characters_is_quoted() {
    assert_eq!(encode(&SlimValue::from("a,b")), "\"a,b\"");
    assert_eq!(encode(&SlimValue::from("a;b")), "\"a;b\"");
    assert_eq!(encode(&SlimValue::from("50% off!")), "\"50% off!\"");
    assert_eq!(encode(&SlimValue::from("user@host")), "\"user@host\"");
    assert_eq!(encode(&SlimValue::from(" padded ")), "\" padded \"");
}

#[test]
fn test_quote_doubling_and_newline_escape() {
    assert_eq!(encode(&SlimValue::from("say \"hi\"")), "\"say \"\"hi\"\"\"");
    assert_eq!(encode(&SlimValue::from("line\nbreak")), "\"line\\nbreak\"");
}

#[test]
fn test_empty_array() {
    assert_eq!(encode(&slim!([])), "@[]");
}

#[test]
fn test_numeric_list() {
    assert_eq!(encode(&slim!([1, 2, 3])), "@#[1,2,3]");
    assert_eq!(
        encode(&slim!([1.5, (f64::NAN), 2])),
        "@#[1.5,NaN,2]"
    );
}

#[test]
fn test_simple_text_list() {
    assert_eq!(encode(&slim!(["red", "green", "blue"])), "@[red,green,blue]");
}

#[test]
fn test_text_needing_quotes_forces_mixed_list() {
    // One comma-bearing element pushes the whole array to the mixed form.
    assert_eq!(encode(&slim!(["red", "a,b"])), "@[red;\"a,b\"]");
}

#[test]
fn test_mixed_list_uses_semicolons() {
    assert_eq!(encode(&slim!([1, "x", true, null])), "@[#1;x;?T;!null]");
}

#[test]
fn test_matrix_form() {
    assert_eq!(encode(&slim!([[1, 2], [3, 4]])), "*[1,2;3,4]");
}

#[test]
fn test_matrix_rows_may_be_ragged() {
    assert_eq!(encode(&slim!([[1], [2, 3, 4]])), "*[1;2,3,4]");
}

#[test]
fn test_empty_record() {
    assert_eq!(encode(&slim!({})), "{}");
}

#[test]
fn test_record_fields_in_insertion_order() {
    assert_eq!(encode(&slim!({"z": 1, "a": 2})), "{z:#1,a:#2}");
}

#[test]
fn test_record_key_quoting() {
    assert_eq!(encode(&slim!({"a:b": 1})), "{\"a:b\":#1}");
    assert_eq!(encode(&slim!({"a,b": 1})), "{\"a,b\":#1}");
    assert_eq!(encode(&slim!({"plain?": 1})), "{plain?:#1}");
}

#[test]
fn test_table_header_and_rows() {
    let value = slim!([
        {"id": 1, "name": "Mario", "active": true},
        {"id": 2, "name": "Luigi", "active": false}
    ]);
    assert_eq!(
        encode(&value),
        "|2|id#,name$,active?|\n1,Mario,T\n2,Luigi,F"
    );
}

#[test]
fn test_table_nullable_marker_and_empty_cells() {
    let value = slim!([{"id": 1}, {"id": 2, "score": 9.5}]);
    assert_eq!(encode(&value), "|2|id#,score#!|\n1,\n2,9.5");
}

#[test]
fn test_single_record_array_is_a_table_at_default_threshold() {
    assert_eq!(encode(&slim!([{"id": 1}])), "|1|id#|\n1");
}

#[test]
fn test_table_threshold_pushes_to_list_form() {
    let value = slim!([{"id": 1}, {"id": 2}]);
    let options = EncodeOptions::new().with_table_threshold(3);
    assert_eq!(
        encode_with_options(&value, &options),
        "@[{id:#1};{id:#2}]"
    );
}

#[test]
fn test_list_valued_cells_join_with_plus() {
    let value = slim!([{"id": 1, "tags": ["a", "b"]}]);
    assert_eq!(encode(&value), "|1|id#,tags@|\n1,a+b");
}

#[test]
fn test_record_valued_cells_encode_recursively() {
    let value = slim!([{"id": 1, "meta": {"x": 2}}]);
    assert_eq!(encode(&value), "|1|id#,meta~|\n1,{x:#2}");
}

#[test]
fn test_table_nested_in_record() {
    let value = slim!({
        "team": [{"id": 1}, {"id": 2}],
        "size": 2
    });
    assert_eq!(encode(&value), "{team:|2|id#|\n1\n2,size:#2}");
}

#[test]
fn test_depth_limit_emits_sentinel() {
    let value = slim!({"a": {"b": {"c": 1}}});
    let options = EncodeOptions::new().with_max_depth(2);
    assert_eq!(encode_with_options(&value, &options), "{a:{b:{c:!DEEP}}}");
}

#[test]
fn test_deep_sentinel_decodes_to_null() {
    assert_eq!(decode("!DEEP").unwrap(), SlimValue::Null);
}

#[test]
fn test_heterogeneous_column_falls_back_to_text() {
    let value = slim!([{"v": 1}, {"v": "x"}]);
    assert_eq!(encode(&value), "|2|v$|\n1\nx");
}
