use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use check::{are_equal_slices, is_unique, Epsilon};

const VALUE: f64 = 15436793.555555;
const SIZES: [usize; 4] = [10, 100, 1_000, 10_000];

macro_rules! bench {
    ($name:literal, $func:expr, $values:ident, $size:ident, $group:ident) => {
        $group.bench_with_input(BenchmarkId::new($name, $size), &$values, |b, values| {
            b.iter(|| $func(black_box(values)))
        });
    };
}

fn equal_floats((x, y): &(Vec<f64>, Vec<f64>)) -> bool {
    are_equal_slices(x, y, Epsilon(0.0))
}

fn unique_floats(xx: &Vec<f64>) -> bool {
    is_unique(xx)
}

pub fn equal_slices_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Equal slices");

    for size in SIZES {
        let positive = (vec![VALUE; size], vec![VALUE; size]);
        let mut negative = positive.clone();
        if let Some(last) = negative.1.last_mut() {
            *last += 0.00001;
        }

        bench!("Positive", equal_floats, positive, size, group);
        bench!("Negative", equal_floats, negative, size, group);
    }
}

pub fn unique_floats_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Unique floats");

    // Positive runs the full scan, negative stops at the first pair
    for size in SIZES {
        let positive = (0..size).map(|i| VALUE + i as f64).collect::<Vec<_>>();
        let mut negative = vec![VALUE; size];
        if let Some(last) = negative.last_mut() {
            *last *= 2.0;
        }

        bench!("Positive", unique_floats, positive, size, group);
        bench!("Negative", unique_floats, negative, size, group);
    }
}

criterion_group!(benches, equal_slices_benchmark, unique_floats_benchmark);
criterion_main!(benches);
