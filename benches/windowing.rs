//! Benchmark suite for the windowing algorithms.
//!
//! Run with: `cargo bench`
//!
//! Compares the two window walks:
//! - loop-based chunking (one transform call per window)
//! - reducer-based sequential windows (one reducer invocation per element)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqcomb::reduce::average;
use seqcomb::window::{chunks_with, moving_average, sequential_windows_with};

fn make_series(len: usize) -> Vec<f64> {
    (0..len).map(|i| ((i * 37) % 101) as f64 / 7.0).collect()
}

fn bench_chunked_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunked_average");
    for len in [1_000usize, 10_000, 100_000] {
        let data = make_series(len);
        let run = chunks_with(average, 64).unwrap();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| run(black_box(data)))
        });
    }
    group.finish();
}

fn bench_sequential_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_average");
    for len in [1_000usize, 10_000] {
        let data = make_series(len);
        let run = sequential_windows_with(64, average).unwrap();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| run(black_box(data)))
        });
    }
    group.finish();
}

fn bench_moving_average_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average_window");
    let data = make_series(10_000);
    for window in [4usize, 16, 64, 256] {
        let run = moving_average(window).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(window), &data, |b, data| {
            b.iter(|| run(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_chunked_average,
    bench_sequential_average,
    bench_moving_average_windows
);
criterion_main!(benches);
