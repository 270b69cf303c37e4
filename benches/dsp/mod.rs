//! Benchmarks for low-level DSP primitives.

mod oscillator;
mod periodic_wave;

pub use oscillator::bench_oscillator;
pub use periodic_wave::bench_periodic_wave;
