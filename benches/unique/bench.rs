use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use check::{is_unique_any, is_unique_slice, Epsilon, Exact};
use rand::Rng;

macro_rules! bench {
    ($name:literal, $func:expr, $values:ident, $group:ident) => {
        $group.bench_function($name, |b| b.iter(|| $func(black_box(&$values))));
    };
}

pub fn is_unique_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Is unique");
    let mut rng = rand::thread_rng();

    let strings = (0..80).map(|i| format!("{i} ")).collect::<Vec<_>>();
    let ints = (0..1_000).map(|_| rng.gen_range(0..1_000_000)).collect::<Vec<i64>>();
    let floats = (0..1_000).map(|_| rng.gen::<f64>()).collect::<Vec<_>>();

    bench!("Strings dynamic", is_unique_any, strings, group);
    bench!("Strings typed", |s: &Vec<String>| is_unique_slice(s, Exact), strings, group);
    bench!("Ints dynamic", is_unique_any, ints, group);
    bench!("Ints typed", |s: &Vec<i64>| is_unique_slice(s, Exact), ints, group);
    bench!("Floats dynamic", is_unique_any, floats, group);
    bench!("Floats typed", |s: &Vec<f64>| is_unique_slice(s, Epsilon(0.0)), floats, group);
}

criterion_group!(benches, is_unique_benchmark);
criterion_main!(benches);
