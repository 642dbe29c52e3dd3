//! Schema inference and validation without encoding any rows.
//!
//! Run with: cargo run --example schema

use serde_slim::{infer_schema, parse_schema, slim, validate_schema, SlimValue};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let rows = vec![
        slim!({"id": 1, "name": "Mario", "score": 90}),
        slim!({"id": 2, "name": "Luigi"}),
    ];

    // Infer: score appears in only one row, so it is nullable.
    let schema = infer_schema(&rows);
    println!("Inferred schema: {}", schema);

    // Parse the schema string back into descriptors.
    for column in parse_schema(&schema) {
        println!(
            "  column {:10} type {:8} nullable {}",
            column.name,
            column.ty.name(),
            column.nullable
        );
    }

    // Validate conforming data: clean report.
    let report = validate_schema(&SlimValue::Array(rows), &schema);
    println!("conforming data valid: {}", report.valid);

    // Validate violating data: every problem is reported, not just the first.
    let bad = slim!([{"id": "not-a-number"}, {"name": 7}]);
    let report = validate_schema(&bad, &schema);
    println!("violating data valid: {}", report.valid);
    for error in &report.errors {
        println!("  {}: {}", error.path, error.message);
    }

    Ok(())
}
