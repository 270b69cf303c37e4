use std::sync::Arc;

use crate::dsp::periodic_wave::PeriodicWave;
use crate::graph::node::RenderCtx;

/// Phase-accumulating oscillator that reads a shared periodic wave.
///
/// Phase is tracked in cycles (0.0 to 1.0) and advances by
/// `frequency / sample_rate` per sample.
pub struct OscillatorBlock {
    wave: Arc<PeriodicWave>,
    phase: f32,
}

impl OscillatorBlock {
    pub fn new(wave: Arc<PeriodicWave>) -> Self {
        Self { wave, phase: 0.0 }
    }

    pub fn sine() -> Self {
        Self::new(PeriodicWave::shared_sine())
    }

    pub fn wave(&self) -> &Arc<PeriodicWave> {
        &self.wave
    }

    pub fn set_wave(&mut self, wave: Arc<PeriodicWave>) {
        self.wave = wave;
    }

    /// Return to the start of the cycle.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn render(&mut self, destination: &mut [f32], ctx: &RenderCtx) {
        let increment = ctx.frequency / ctx.sample_rate;
        for sample in destination.iter_mut() {
            *sample = self.wave.sample(self.phase);
            self.phase += increment;
            self.phase -= self.phase.floor();
        }
    }
}
