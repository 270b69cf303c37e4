//! Benchmarks for building wave tables from coefficients.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ringtone::dsp::PeriodicWave;

pub fn bench_periodic_wave(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/periodic_wave");

    for &harmonics in &[1usize, 8, 32, 128] {
        group.bench_with_input(
            BenchmarkId::new("square", harmonics),
            &harmonics,
            |b, &n| b.iter(|| PeriodicWave::square(black_box(n))),
        );
    }

    group.finish();
}
