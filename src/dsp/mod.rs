//! Low-level DSP primitives used by the graph nodes.
//!
//! The wave table is built once, up front. Rendering from it is
//! allocation-free, so oscillators are safe to drive from the audio thread.

/// Wavetable oscillator reading a shared periodic wave.
pub mod oscillator;
/// Single-cycle waveforms synthesised from harmonic coefficients.
pub mod periodic_wave;

pub use periodic_wave::{PeriodicWave, WaveError, WavePreset};
