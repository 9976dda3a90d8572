//! Series Benchmarks
//!
//! Benchmarks for sorting, reductions and elementwise arithmetic.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pango::Series;

/// Create a test Series with pseudo-random values
fn create_test_series(n: usize) -> Series<f64> {
    let mut rng_state: u64 = 42;
    let values: Vec<f64> = (0..n)
        .map(|_| {
            rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (rng_state >> 33) as f64 / (u32::MAX as f64)
        })
        .collect();
    Series::with_default_index("bench", values).unwrap()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sort");

    for n in [1_000, 10_000, 100_000].iter() {
        let series = create_test_series(*n);
        group.bench_with_input(BenchmarkId::new("by_value", n), &series, |b, s| {
            b.iter(|| std::hint::black_box(s.sort_by_value(true)))
        });
        group.bench_with_input(BenchmarkId::new("by_index_desc", n), &series, |b, s| {
            b.iter(|| std::hint::black_box(s.sort_by_index(false)))
        });
    }

    group.finish();
}

fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reductions");
    let series = create_test_series(100_000);

    group.bench_function("sum", |b| b.iter(|| std::hint::black_box(series.sum())));
    group.bench_function("std_dev", |b| {
        b.iter(|| std::hint::black_box(series.std_dev(1).unwrap()))
    });
    group.bench_function("cum_sum", |b| b.iter(|| std::hint::black_box(series.cum_sum())));

    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Arithmetic");
    let left = create_test_series(100_000);
    let right = create_test_series(100_000).pow(2.0, "right");

    group.bench_function("add", |b| {
        b.iter(|| std::hint::black_box(left.add(&right, "").unwrap()))
    });
    group.bench_function("correlation", |b| {
        b.iter(|| std::hint::black_box(left.correlation(&right).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_sort, bench_reductions, bench_arithmetic);
criterion_main!(benches);
