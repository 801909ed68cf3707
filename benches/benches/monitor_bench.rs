//! # Monitor Benchmarks
//!
//! Measures the acquire/evaluate loop against in-memory devices.
//!
//! Run: `cargo bench --bench monitor_bench`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ronqi_core::{BreathingProfile, ScriptedDevice, SimulatedDevice};
use ronqi_monitor::{ApneaMonitor, HISTORY_CAPACITY};

/// Benchmark one acquisition followed by an evaluation
fn bench_acquire_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("acquire_evaluate");

    let mut scripted = ApneaMonitor::new();
    scripted.attach_device(ScriptedDevice::healthy().with_readings(25.0, 35.0));
    group.bench_function("scripted", |b| {
        b.iter(|| {
            scripted.acquire_reading().unwrap();
            black_box(scripted.evaluate_apnea())
        })
    });

    let mut simulated = ApneaMonitor::new();
    simulated.attach_device(SimulatedDevice::new(BreathingProfile::Apnea));
    simulated.initialize().unwrap();
    group.bench_function("simulated", |b| {
        b.iter(|| {
            simulated.acquire_reading().unwrap();
            black_box(simulated.evaluate_apnea())
        })
    });

    group.finish();
}

/// Benchmark connection handling
fn bench_connection(c: &mut Criterion) {
    let mut group = c.benchmark_group("connection");

    group.bench_function("initialize", |b| {
        b.iter(|| {
            let mut monitor = ApneaMonitor::new();
            monitor.attach_device(ScriptedDevice::healthy());
            black_box(monitor.initialize().unwrap())
        })
    });

    let mut connected = ApneaMonitor::new();
    connected.attach_device(ScriptedDevice::healthy().connected());
    group.bench_function("reconnect_noop", |b| {
        b.iter(|| black_box(connected.reconnect().unwrap()))
    });

    group.finish();
}

/// Benchmark evaluation over a full window
fn bench_full_window(c: &mut Criterion) {
    let mut monitor = ApneaMonitor::new();
    monitor.attach_device(ScriptedDevice::healthy().with_readings(10.0, 10.0));
    for _ in 0..HISTORY_CAPACITY {
        monitor.acquire_reading().unwrap();
    }

    c.bench_function("assess_full_window", |b| b.iter(|| black_box(monitor.assess())));
}

criterion_group!(benches, bench_acquire_evaluate, bench_connection, bench_full_window);

criterion_main!(benches);
