use std::sync::Arc;

use crate::dsp::{oscillator::OscillatorBlock, periodic_wave::PeriodicWave};
use crate::graph::node::{seconds_to_frame, GraphNode, RenderCtx};

/*
Scheduled Oscillator
====================

An OscNode is a one-shot tone generator. It is created, given a waveform and
a frequency, told when to start and when to stop on the audio clock, and then
handed to an audio context. From then on it is driven purely by the clock:
nothing calls into it at note boundaries.

Timeline of a node scheduled with start(0.5) and stop(0.75) at 1 kHz:

    frame:    0 ........ 499 | 500 ............ 749 | 750 ......
    output:   silence        | wave, phase from 0   | silence, finished

Start and stop are absolute times in seconds, converted to frames with
`seconds_to_frame`, so a node starting exactly where another stops picks up
on the very next sample with no gap and no overlap.

Lifecycle:
  - Unscheduled: never started. Silent, not active.
  - Scheduled:   started, clock hasn't reached start yet. Silent, active.
  - Playing:     start <= frame < stop. Audible, active.
  - Finished:    clock passed stop. Silent, not active. Dropped by the context.

A node that is stopped at or before its start time never becomes audible.
A node with no stop time plays forever.

Example usage:
  let mut osc = context.create_oscillator();
  osc.set_periodic_wave(wave);
  osc.set_frequency(440.0);
  osc.start(now);
  osc.stop(now + 0.5);
  context.connect(osc);
*/

/// Where a node is in its one-shot lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscState {
    Unscheduled,
    Scheduled,
    Playing,
    Finished,
}

pub struct OscNode {
    osc: OscillatorBlock,
    /// Frequency in Hz, stored exactly as set.
    frequency: f32,
    start_time: Option<f64>,
    stop_time: Option<f64>,
    state: OscState,
}

impl OscNode {
    /// Create an oscillator reading `wave`, at the default 440 Hz.
    pub fn new(wave: Arc<PeriodicWave>) -> Self {
        Self {
            osc: OscillatorBlock::new(wave),
            frequency: 440.0,
            start_time: None,
            stop_time: None,
            state: OscState::Unscheduled,
        }
    }

    pub fn sine() -> Self {
        Self::new(PeriodicWave::shared_sine())
    }

    /// Swap the waveform. Phase is kept.
    pub fn set_periodic_wave(&mut self, wave: Arc<PeriodicWave>) {
        self.osc.set_wave(wave);
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.set_frequency(frequency);
        self
    }

    /// Begin output at `when` seconds on the audio clock.
    pub fn start(&mut self, when: f64) {
        self.start_time = Some(when);
        if self.state == OscState::Unscheduled {
            self.state = OscState::Scheduled;
        }
    }

    /// End output at `when` seconds on the audio clock.
    pub fn stop(&mut self, when: f64) {
        self.stop_time = Some(when);
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    pub fn stop_time(&self) -> Option<f64> {
        self.stop_time
    }

    pub fn wave(&self) -> &Arc<PeriodicWave> {
        self.osc.wave()
    }

    pub fn state(&self) -> OscState {
        self.state
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        out.fill(0.0);

        let Some(start_time) = self.start_time else {
            return;
        };
        if self.state == OscState::Finished {
            return;
        }

        let block_start = ctx.frame;
        let block_end = block_start + out.len() as u64;
        let start = seconds_to_frame(start_time, ctx.sample_rate);
        let stop = self
            .stop_time
            .map_or(u64::MAX, |t| seconds_to_frame(t, ctx.sample_rate));

        let from = start.max(block_start);
        let to = stop.min(block_end);
        if from < to && self.frequency.is_finite() {
            if self.state == OscState::Scheduled {
                self.osc.reset();
                self.state = OscState::Playing;
            }
            let modified_ctx = RenderCtx {
                frequency: self.frequency,
                ..*ctx
            };
            let lo = (from - block_start) as usize;
            let hi = (to - block_start) as usize;
            self.osc.render(&mut out[lo..hi], &modified_ctx);
        }

        if block_end >= stop {
            self.state = OscState::Finished;
        }
    }

    fn is_active(&self) -> bool {
        matches!(self.state, OscState::Scheduled | OscState::Playing)
    }
}
