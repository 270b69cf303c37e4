pub mod dsp;
pub mod graph; // Schedulable oscillator nodes
pub mod io;
pub mod player; // Audio context, ringtone fold, request engine
pub mod sequencing; // Notes and their playback schedule

pub use player::{EngineConfig, RingtoneEngine};

pub const MAX_BLOCK_SIZE: usize = 2048;
