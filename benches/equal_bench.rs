//! Benchmark for sequence equality and string rendering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambars_iter::equal::{sequence_equal, sequence_equal2, sequence_equal_by};
use lambars_iter::format::string_def2;

fn benchmark_sequence_equal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence_equal");

    for size in [100, 1_000, 10_000] {
        let first: Vec<i64> = (0..size).collect();
        let second = first.clone();

        group.bench_with_input(BenchmarkId::new("partial_eq", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sequence_equal(Some(&first), Some(&second))));
        });

        group.bench_with_input(BenchmarkId::new("custom", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(sequence_equal_by(
                    Some(&first),
                    Some(&second),
                    Some(|left: &i64, right: &i64| left == right),
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("vec_eq", size), &size, |bencher, _| {
            bencher.iter(|| black_box(first == second));
        });
    }

    group.finish();
}

fn benchmark_sequence_equal2(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence_equal2");

    for size in [100, 1_000, 10_000] {
        let first: Vec<(i64, String)> = (0..size).map(|key| (key, key.to_string())).collect();
        let second = first.clone();

        group.bench_with_input(BenchmarkId::new("pairs", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(sequence_equal2(
                    Some(first.iter().map(|(key, value)| (key, value))),
                    Some(second.iter().map(|(key, value)| (key, value))),
                ))
            });
        });
    }

    group.finish();
}

fn benchmark_string_def2(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("string_def2");

    for size in [100, 1_000] {
        let pairs: Vec<(i64, i64)> = (0..size).map(|key| (key, key * key)).collect();

        group.bench_with_input(BenchmarkId::new("render", size), &size, |bencher, _| {
            bencher.iter(|| black_box(string_def2(Some(pairs.iter().copied()))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sequence_equal,
    benchmark_sequence_equal2,
    benchmark_string_def2
);

criterion_main!(benches);
