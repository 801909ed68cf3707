//! # History Benchmarks
//!
//! Measures sliding-window insertion and mean computation.
//!
//! Run: `cargo bench --bench history_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ronqi_core::Reading;
use ronqi_monitor::{HISTORY_CAPACITY, ReadingHistory};

fn filled(capacity: usize) -> ReadingHistory {
    let mut history = ReadingHistory::new(capacity).unwrap();
    for i in 0..capacity {
        history.push(Reading::new(i as f32, (i * 2) as f32));
    }
    history
}

/// Benchmark push with and without eviction
fn bench_history_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_push");

    group.bench_function("push_until_full", |b| {
        b.iter(|| {
            let mut history = ReadingHistory::default();
            for i in 0..HISTORY_CAPACITY {
                black_box(history.push(Reading::new(i as f32, 0.0)));
            }
            history
        })
    });

    let mut history = filled(HISTORY_CAPACITY);
    group.bench_function("push_evicting", |b| {
        b.iter(|| black_box(history.push(black_box(Reading::new(25.0, 35.0)))))
    });

    group.finish();
}

/// Benchmark mean computation across window sizes
fn bench_history_means(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_means");

    for capacity in [1, HISTORY_CAPACITY, 64, 1024] {
        let history = filled(capacity);
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &history, |b, h| {
            b.iter(|| black_box(h.means()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_history_push, bench_history_means);

criterion_main!(benches);
