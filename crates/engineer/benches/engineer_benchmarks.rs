//! Benchmarks for pricefeat-engineer fit and transform.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use polars::prelude::*;
use pricefeat_engineer::{Estimator, FeatureConfig, FeatureEngineer};
use rand::Rng;

const BRANDS: [&str; 8] = ["nike", "adidas", "levis", "zara", "mango", "acme", "coach", "gap"];
const CATEGORIES: [&str; 6] = [
    "Women/Tops & Blouses/Blouse",
    "Women/Dresses/Maxi",
    "Men/Shoes/Boots",
    "Men/Tops/T-Shirts",
    "Home/Decor/Candles",
    "Electronics/Phones/Cases",
];
const WORDS: [&str; 10] =
    ["new", "vintage", "1995", "cotton", "red", "size", "small", "tags", "worn", "retro"];

fn random_text(rng: &mut impl Rng, len: usize) -> String {
    (0..len).map(|_| WORDS[rng.gen_range(0..WORDS.len())]).collect::<Vec<_>>().join(" ")
}

fn random_listings(n: usize) -> DataFrame {
    let mut rng = rand::thread_rng();
    let names: Vec<String> = (0..n).map(|_| random_text(&mut rng, 4)).collect();
    let descriptions: Vec<String> = (0..n).map(|_| random_text(&mut rng, 20)).collect();
    let brands: Vec<&str> = (0..n).map(|_| BRANDS[rng.gen_range(0..BRANDS.len())]).collect();
    let categories: Vec<&str> =
        (0..n).map(|_| CATEGORIES[rng.gen_range(0..CATEGORIES.len())]).collect();
    let conditions: Vec<i64> = (0..n).map(|_| rng.gen_range(1..=5)).collect();
    let prices: Vec<f64> = (0..n).map(|_| rng.r#gen::<f64>() * 200.0).collect();

    df! {
        "name" => names,
        "item_description" => descriptions,
        "brand_name" => brands,
        "category_name" => categories,
        "item_condition_id" => conditions,
        "price" => prices,
    }
    .unwrap()
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for size in [1000, 10000, 100000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let train = random_listings(size);
            b.iter(|| {
                let mut engineer = FeatureEngineer::new();
                engineer.fit(black_box(&train)).unwrap();
                engineer
            });
        });
    }

    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for size in [1000, 10000, 100000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let data = random_listings(size);
            let config = FeatureConfig { replace_rare_brands: true, ..FeatureConfig::default() };
            let mut engineer = FeatureEngineer::with_config(config);
            engineer.fit(&data).unwrap();
            b.iter(|| engineer.transform(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

fn bench_persist(c: &mut Criterion) {
    let mut engineer = FeatureEngineer::new();
    engineer.fit(&random_listings(10000)).unwrap();
    let json = engineer.to_json().unwrap();

    c.bench_function("to_json", |b| b.iter(|| black_box(&engineer).to_json().unwrap()));
    c.bench_function("from_json", |b| {
        b.iter(|| FeatureEngineer::from_json(black_box(&json)).unwrap());
    });
}

criterion_group!(benches, bench_fit, bench_transform, bench_persist);
criterion_main!(benches);
