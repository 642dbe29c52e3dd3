//! Table encoding: SLIM's most compact form for uniform record arrays.
//!
//! Run with: cargo run --example tabular

use serde_slim::{decode, encode, slim, EncodeOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let roster = slim!([
        {"id": 1, "name": "Mario", "active": true},
        {"id": 2, "name": "Luigi", "active": false},
        {"id": 3, "name": "Peach", "active": true}
    ]);

    // Uniform records collapse into a table: keys are paid for once,
    // in the header.
    let table = encode(&roster);
    println!("Table form:\n{}\n", table);

    // Compare against the generic list form.
    let options = EncodeOptions::new().with_table_threshold(10);
    let list = serde_slim::encode_with_options(&roster, &options);
    println!("List form ({} chars vs {}):\n{}\n", table.len(), list.len(), list);

    // Both decode to the same value.
    assert_eq!(decode(&table)?, decode(&list)?);
    println!("✓ Table and list forms decode identically");

    Ok(())
}
