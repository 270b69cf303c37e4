//! Benchmarks for rendering whole ringtones through the engine.
//!
//! Each iteration schedules fresh contexts, so the host-side cost of
//! building them is included alongside mixing.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ringtone::{
    dsp::PeriodicWave,
    player::{AudioContext, RingtoneEngine, RingtonePlayer},
    sequencing::Note,
    EngineConfig,
};

const BLOCK_SIZE: usize = 256;

fn ringtone() -> Vec<Note> {
    (0..16)
        .map(|i| Note::from_midi(60 + (i % 12) as u8, 0.05))
        .collect()
}

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");
    let config = EngineConfig::default();
    let player = RingtonePlayer::new(config.sample_rate, PeriodicWave::square(32));
    let notes = ringtone();
    // 16 notes x 50ms = 0.8s of audio
    let blocks = (0.8 * config.sample_rate as f64 / BLOCK_SIZE as f64).ceil() as usize;

    for &concurrent in &[1usize, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("ringtone", concurrent),
            &concurrent,
            |b, &n| {
                let mut buffer = vec![0.0f32; BLOCK_SIZE];
                b.iter(|| {
                    let queue: VecDeque<AudioContext> = (0..n).map(|_| player.play(&notes)).collect();
                    let mut engine = RingtoneEngine::new(config, queue);
                    for _ in 0..blocks {
                        engine.render_block(black_box(&mut buffer));
                    }
                })
            },
        );
    }

    group.finish();
}
