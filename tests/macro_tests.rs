//! Tests for the `slim!` value-construction macro.

use serde_slim::{encode, slim, Number, SlimValue};

#[test]
fn test_macro_builds_primitives() {
    assert_eq!(slim!(null), SlimValue::Null);
    assert_eq!(slim!(undefined), SlimValue::Undefined);
    assert_eq!(slim!(true), SlimValue::Bool(true));
    assert_eq!(slim!(42), SlimValue::Number(Number::Integer(42)));
    assert_eq!(slim!("text"), SlimValue::String("text".to_string()));
}

#[test]
fn test_macro_builds_nested_structures() {
    let value = slim!({
        "id": 7,
        "name": "Mario",
        "inventory": [
            {"item": "mushroom", "count": 3},
            {"item": "star", "count": 1}
        ]
    });

    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("id").and_then(|v| v.as_i64()), Some(7));
    let inventory = obj.get("inventory").unwrap().as_array().unwrap();
    assert_eq!(inventory.len(), 2);
    assert_eq!(
        inventory[1].as_object().unwrap().get("item").and_then(|v| v.as_str()),
        Some("star")
    );
}

#[test]
fn test_macro_accepts_expressions() {
    let count = 2 + 3;
    assert_eq!(slim!((count)), SlimValue::Number(Number::Integer(5)));

    let name = String::from("Peach");
    assert_eq!(slim!((name.clone())), SlimValue::String(name));
}

#[test]
fn test_macro_output_encodes() {
    let value = slim!({"greeting": "hello", "count": 2});
    assert_eq!(encode(&value), "{greeting:hello,count:#2}");
}

#[test]
fn test_macro_trailing_commas() {
    let value = slim!({
        "a": 1,
        "b": [1, 2,],
    });
    assert_eq!(value.as_object().unwrap().len(), 2);
}
