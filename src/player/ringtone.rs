//! The ringtone fold: one oscillator per note, back to back.

use std::sync::Arc;

use crate::{
    dsp::PeriodicWave,
    player::context::AudioContext,
    sequencing::{Note, Schedule},
};

/// Turns note sequences into scheduled oscillators.
///
/// Holds only configuration. Every `play` builds a fresh context, so calls
/// share no mutable state and can overlap freely.
#[derive(Debug, Clone)]
pub struct RingtonePlayer {
    sample_rate: f32,
    wave: Arc<PeriodicWave>,
}

impl RingtonePlayer {
    pub fn new(sample_rate: f32, wave: impl Into<Arc<PeriodicWave>>) -> Self {
        Self {
            sample_rate,
            wave: wave.into(),
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn wave(&self) -> &Arc<PeriodicWave> {
        &self.wave
    }

    /// Timeline for `notes` without creating any audio nodes
    pub fn schedule(&self, notes: &[Note]) -> Schedule {
        Schedule::from_notes(notes)
    }

    /// Schedule `notes` on a new audio context.
    ///
    /// Note i starts at the context's current time plus the sum of the
    /// durations before it and stops its own duration later. The returned
    /// context renders the ringtone as its clock advances.
    pub fn play(&self, notes: &[Note]) -> AudioContext {
        let mut context = AudioContext::new(self.sample_rate);
        let now = context.current_time();

        for entry in &self.schedule(notes) {
            let mut oscillator = context.create_oscillator();
            oscillator.set_periodic_wave(Arc::clone(&self.wave));
            oscillator.set_frequency(entry.frequency);
            oscillator.start(now + entry.offset);
            oscillator.stop(now + entry.stop());
            context.connect(oscillator);
        }

        context
    }
}
