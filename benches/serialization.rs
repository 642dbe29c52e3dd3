use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_slim::{decode, encode, from_str, to_string, to_value, SlimValue};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn make_products(count: u32) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn benchmark_encode_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };
    let value = to_value(&user).unwrap();

    c.bench_function("encode_simple_record", |b| {
        b.iter(|| encode(black_box(&value)))
    });
}

fn benchmark_decode_simple(c: &mut Criterion) {
    let text = "{id:#123,name:Alice,email:\"alice@example.com\",active:?T}";

    c.bench_function("decode_simple_record", |b| {
        b.iter(|| decode(black_box(text)).unwrap())
    });
}

fn benchmark_encode_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_table");

    for size in [10, 50, 100, 500].iter() {
        let value: SlimValue = to_value(&make_products(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| encode(black_box(&value)))
        });
    }
    group.finish();
}

fn benchmark_decode_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_table");

    for size in [10, 50, 100, 500].iter() {
        let text = encode(&to_value(&make_products(*size)).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| decode(black_box(&text)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_serde_bridge(c: &mut Criterion) {
    let products = make_products(100);
    let text = to_string(&products).unwrap();

    c.bench_function("to_string_100_products", |b| {
        b.iter(|| to_string(black_box(&products)).unwrap())
    });
    c.bench_function("from_str_100_products", |b| {
        b.iter(|| from_str::<Vec<Product>>(black_box(&text)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_encode_simple,
    benchmark_decode_simple,
    benchmark_encode_table,
    benchmark_decode_table,
    benchmark_serde_bridge
);
criterion_main!(benches);
