//! Value-level round trips: decode(encode(v)) must reproduce v for every
//! representable shape, modulo the documented table-cell collapse of
//! null/undefined/empty cells.

use serde_slim::{
    decode, decode_with_options, encode, slim, DecodeOptions, Error, Number, SlimValue,
};

fn roundtrip(value: &SlimValue) {
    let text = encode(value);
    let back = decode(&text).expect("decode failed");
    assert_eq!(&back, value, "round trip failed through {:?}", text);
}

#[test]
fn test_primitives_roundtrip() {
    roundtrip(&SlimValue::Null);
    roundtrip(&SlimValue::Undefined);
    roundtrip(&SlimValue::Bool(true));
    roundtrip(&SlimValue::Bool(false));
    roundtrip(&SlimValue::from(0));
    roundtrip(&SlimValue::from(-123456789));
    roundtrip(&SlimValue::from(3.25));
    roundtrip(&SlimValue::from(-0.001));
}

#[test]
fn test_special_numbers_roundtrip() {
    roundtrip(&SlimValue::Number(Number::NaN));
    roundtrip(&SlimValue::Number(Number::Infinity));
    roundtrip(&SlimValue::Number(Number::NegativeInfinity));
}

#[test]
fn test_text_roundtrip() {
    roundtrip(&SlimValue::from(""));
    roundtrip(&SlimValue::from("plain"));
    roundtrip(&SlimValue::from("two words"));
    roundtrip(&SlimValue::from("a,b;c|d"));
    roundtrip(&SlimValue::from("quote \" inside"));
    roundtrip(&SlimValue::from("line\nbreak"));
    roundtrip(&SlimValue::from(" leading and trailing "));
    roundtrip(&SlimValue::from("unicode: héllo 🚀 日本語"));
    roundtrip(&SlimValue::from("looks like a marker: #42"));
}

#[test]
fn test_lists_roundtrip() {
    roundtrip(&slim!([]));
    roundtrip(&slim!([1, 2, 3]));
    roundtrip(&slim!([1.5, 2.5]));
    roundtrip(&slim!(["red", "green", "blue"]));
    roundtrip(&slim!([1, "x", true, null]));
    roundtrip(&slim!(["a,b", "c;d"]));
    roundtrip(&slim!([[1, 2], [3, 4]]));
    roundtrip(&slim!([[1], [2, 3, 4]]));
    roundtrip(&slim!([(f64::NAN), (f64::INFINITY), 1]));
}

#[test]
fn test_nested_containers_roundtrip() {
    roundtrip(&slim!({"a": [1, 2], "b": {"c": "deep"}}));
    roundtrip(&slim!([[["x"]], [["y", "z"]]]));
    roundtrip(&slim!({"empty_list": [], "empty_map": {}}));
}

#[test]
fn test_records_roundtrip() {
    roundtrip(&slim!({}));
    roundtrip(&slim!({"id": 1, "name": "Mario"}));
    roundtrip(&slim!({"a:b": 1, "c,d": 2, "plain": 3}));
    roundtrip(&slim!({"nullish": null, "missing": undefined}));
}

#[test]
fn test_record_key_order_is_preserved() {
    let value = slim!({"zebra": 1, "apple": 2, "mango": 3});
    let back = decode(&encode(&value)).unwrap();
    let keys: Vec<_> = back.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_uniform_table_roundtrip() {
    roundtrip(&slim!([
        {"id": 1, "name": "Mario", "active": true},
        {"id": 2, "name": "Luigi", "active": false}
    ]));
}

#[test]
fn test_table_with_list_and_record_columns_roundtrip() {
    roundtrip(&slim!([
        {"id": 1, "tags": ["a", "b"], "meta": {"x": 1}},
        {"id": 2, "tags": ["c"], "meta": {"x": 2}}
    ]));
}

#[test]
fn test_numeric_list_cells_keep_numbers() {
    roundtrip(&slim!([
        {"id": 1, "scores": [90, 85]},
        {"id": 2, "scores": [70, 95.5]}
    ]));
}

#[test]
fn test_table_cells_with_conflicting_text_roundtrip() {
    roundtrip(&slim!([
        {"id": 1, "note": "plain"},
        {"id": 2, "note": "comma, semicolon; and \"quotes\""}
    ]));
}

#[test]
fn test_table_nested_in_record_roundtrip() {
    roundtrip(&slim!({
        "team": [{"id": 1, "name": "Mario"}, {"id": 2, "name": "Luigi"}],
        "size": 2
    }));
}

#[test]
fn test_table_nested_in_mixed_list_roundtrip() {
    roundtrip(&slim!([
        [{"id": 1, "name": "Mario"}],
        [{"id": 2, "name": "Luigi"}]
    ]));
}

#[test]
fn test_table_cell_collapse_is_the_documented_loss() {
    // Missing keys and explicit nulls both come back as null in a nullable
    // column; the absent/null distinction does not survive the table form.
    let value = slim!([{"id": 1}, {"id": 2, "score": null}]);
    let back = decode(&encode(&value)).unwrap();
    assert_eq!(
        back,
        slim!([{"id": 1, "score": null}, {"id": 2, "score": null}])
    );
}

#[test]
fn test_single_empty_row_matrix_collapses() {
    // `[[]]` has no cells and no separators, so its encoding `*[]` reads
    // back as the empty array.
    assert_eq!(encode(&slim!([[]])), "*[]");
    assert_eq!(decode("*[]").unwrap(), slim!([]));
    // Two empty rows keep their separator and survive.
    roundtrip(&slim!([[], []]));
}

#[test]
fn test_lenient_decode_recovers_from_truncation() {
    assert_eq!(decode("@[#1,#2").unwrap(), slim!([1, 2]));
    assert_eq!(decode("{a:#1").unwrap(), slim!({"a": 1}));
    assert_eq!(decode("\"unterminated").unwrap(), slim!("unterminated"));
}

#[test]
fn test_strict_decode_rejects_truncation() {
    let strict = DecodeOptions::strict();
    assert!(decode_with_options("@[#1,#2", &strict).is_err());
    assert!(decode_with_options("{a:#1", &strict).is_err());
    assert!(decode_with_options("\"unterminated", &strict).is_err());
}

#[test]
fn test_strict_decode_rejects_malformed_markers() {
    let strict = DecodeOptions::strict();
    assert!(decode_with_options("?X", &strict).is_err());
    assert!(decode_with_options("!nope", &strict).is_err());
    assert!(decode_with_options("#abc", &strict).is_err());
}

#[test]
fn test_strict_decode_rejects_trailing_input() {
    let strict = DecodeOptions::strict();
    assert_eq!(
        decode_with_options("#42]", &strict),
        Err(Error::TrailingInput { offset: 3 })
    );
}

#[test]
fn test_strict_decode_rejects_table_row_shortfall() {
    let strict = DecodeOptions::strict();
    assert!(decode_with_options("|3|id#|\n1\n2", &strict).is_err());
    // Lenient mode takes what is there.
    let back = decode("|3|id#|\n1\n2").unwrap();
    assert_eq!(back.as_array().unwrap().len(), 2);
}

#[test]
fn test_adversarial_nesting_is_bounded() {
    let mut text = String::new();
    for _ in 0..5000 {
        text.push_str("{a:");
    }
    text.push_str("#1");
    for _ in 0..5000 {
        text.push('}');
    }

    // Lenient: deep subtree becomes null, no stack exhaustion.
    let value = decode(&text).unwrap();
    assert!(value.is_object());

    // Strict: deterministic depth error.
    assert!(matches!(
        decode_with_options(&text, &DecodeOptions::strict()),
        Err(Error::DepthExceeded { .. })
    ));
}

#[test]
fn test_adversarial_list_nesting_is_bounded() {
    let mut text = String::new();
    for _ in 0..5000 {
        text.push_str("@[");
    }
    for _ in 0..5000 {
        text.push(']');
    }
    assert!(decode(&text).is_ok());
}

#[test]
fn test_decoded_depth_limit_is_configurable() {
    let options = DecodeOptions::new().with_max_depth(2);
    let back = decode_with_options("{a:{b:{c:#1}}}", &options).unwrap();
    assert_eq!(back, slim!({"a": {"b": {"c": null}}}));
}
