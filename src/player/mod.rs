// Purpose: turn inbound ringtone requests into scheduled, mixed audio.
// This layer sits above graph nodes and owns the audio clock.

#[cfg(feature = "rtrb")]
pub mod channel;
pub mod context;
pub mod engine;
pub mod message;
pub mod ringtone;

#[cfg(feature = "rtrb")]
pub use channel::{channel, EngineQueue, RingtoneSender, SendError};
pub use context::AudioContext;
pub use engine::RingtoneEngine;
pub use message::{ContextQueue, RingtoneRequest};
pub use ringtone::RingtonePlayer;

/// Settings for a `RingtoneEngine`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Output sample rate in Hz
    pub sample_rate: f32,
    /// Ringtones allowed to play at once; extra ones are discarded
    pub max_contexts: usize,
    /// Linear gain applied to the mix
    pub gain: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            max_contexts: 8,
            gain: 1.0,
        }
    }
}
