//! Criterion benchmarks for full controller ticks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ripple_bench::{reference_profile, stress_profile};

fn bench_tick_90k(c: &mut Criterion) {
    let mut sim = reference_profile(42).unwrap();

    // Warm up: run one tick so the first snapshot allocation is done
    sim.tick().unwrap();

    c.bench_function("tick_90k", |b| {
        b.iter(|| {
            let result = sim.tick().unwrap();
            black_box(&result);
        });
    });
}

fn bench_tick_1m(c: &mut Criterion) {
    let mut sim = stress_profile(42).unwrap();
    sim.tick().unwrap();

    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("tick_1m", |b| {
        b.iter(|| {
            let result = sim.tick().unwrap();
            black_box(&result);
        });
    });
    group.finish();
}

fn bench_100_ticks_90k(c: &mut Criterion) {
    let mut group = c.benchmark_group("runs");
    group.sample_size(10);
    group.bench_function("100_ticks_90k", |b| {
        b.iter(|| {
            let mut sim = reference_profile(42).unwrap();
            for _ in 0..100 {
                let result = sim.tick().unwrap();
                black_box(&result);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_tick_90k, bench_tick_1m, bench_100_ticks_90k);
criterion_main!(benches);
