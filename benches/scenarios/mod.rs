//! Real-world playback scenarios.

mod engine;

pub use engine::bench_engine;
