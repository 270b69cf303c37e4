//! Benchmarks for oscillator rendering.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion};
use ringtone::dsp::{oscillator::OscillatorBlock, PeriodicWave};
use ringtone::graph::{node::RenderCtx, GraphNode, OscNode};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let ctx = RenderCtx::from_freq(48_000.0, 440.0);
    let wave = Arc::new(PeriodicWave::triangle(32));

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Raw table lookup, no scheduling
        let mut osc = OscillatorBlock::new(Arc::clone(&wave));
        group.bench_with_input(BenchmarkId::new("block", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // Scheduled node, always inside its window
        let mut node = OscNode::new(Arc::clone(&wave)).with_frequency(440.0);
        node.start(0.0);
        group.bench_with_input(BenchmarkId::new("node", size), &size, |b, _| {
            b.iter(|| {
                node.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
