use std::{collections::HashMap, iter};

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use check::{all_values_in, which_values_in, which_values_in_map, Epsilon, Exact};
use rand::Rng;

macro_rules! bench {
    ($name:literal, $func:ident, $target:ident, $values:ident, $group:ident) => {
        $group.bench_function($name, |b| {
            b.iter_batched(
                || $values.next().unwrap(),
                |lst| $func(&lst, &$target),
                BatchSize::SmallInput,
            )
        });
    };
}

fn all_ints(lst: &Vec<i64>, target: &Vec<i64>) -> bool {
    all_values_in(lst, target, Exact)
}

fn which_ints(lst: &Vec<i64>, target: &Vec<i64>) -> bool {
    which_values_in(lst, target, Exact).1
}

fn which_floats_map(lst: &Vec<f64>, target: &HashMap<usize, f64>) -> bool {
    which_values_in_map(lst, target, Epsilon(0.001)).1
}

pub fn membership_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Membership");

    let size = 200;
    let ints = (0..size).collect::<Vec<i64>>();
    let floats = (0..size).map(|i| i as f64 / 10.0).enumerate().collect::<HashMap<_, _>>();

    let mut int_values = iter::repeat_with(|| {
        (0..size / 4)
            .map(|_| rand::thread_rng().gen_range(0..size))
            .collect::<Vec<i64>>()
    });
    let mut float_values = iter::repeat_with(|| {
        (0..size / 4)
            .map(|_| rand::thread_rng().gen_range(0.0..size as f64 / 10.0))
            .collect::<Vec<f64>>()
    });

    bench!("All values in", all_ints, ints, int_values, group);
    bench!("Which values in", which_ints, ints, int_values, group);
    bench!("Which values in map", which_floats_map, floats, float_values, group);
}

criterion_group!(benches, membership_benchmark);
criterion_main!(benches);
