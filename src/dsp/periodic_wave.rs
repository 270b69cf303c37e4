use std::f64::consts::TAU;
use std::fmt;
use std::sync::{Arc, OnceLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Periodic Waves
==============

A periodic wave describes one cycle of an arbitrary waveform by its Fourier
coefficients. Each harmonic k contributes a cosine term (real[k]) and a sine
term (imag[k]):

    x(p) = sum over k = 1..n-1 of  real[k] * cos(2π k p) + imag[k] * sin(2π k p)

where p is the phase in cycles (0.0 to 1.0). Index 0 would be the DC offset
and is ignored, so a pure sine is real = [0, 0], imag = [0, 1].

The cycle is synthesised once into a fixed-size table. Oscillators then read
it with linear interpolation, so the per-sample cost does not depend on how
many harmonics the wave has.

Normalisation
-------------
By default the table is scaled so its peak absolute value is exactly 1.0. A
wave with many strong harmonics would otherwise clip. Normalisation can be
disabled to keep the coefficients' absolute amplitudes.

Band-limiting
-------------
The table is not re-synthesised per pitch. Harmonics above Nyquist fold back
(alias) at high fundamentals. Ringtones sit low enough that this has not
mattered.

Example usage:
  let wave = PeriodicWave::sine();
  let bell = PeriodicWave::from_harmonics(&[1.0, 0.0, 0.4, 0.0, 0.2]);
  let hollow = PeriodicWave::square(16);
*/

/// Number of samples in one synthesised wave cycle.
pub const TABLE_SIZE: usize = 2048;

/// Single-cycle wavetable built from harmonic coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicWave {
    table: Vec<f32>,
    harmonics: usize,
}

/// Errors raised when building a wave from coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaveError {
    /// `real` and `imag` must describe the same harmonics
    LengthMismatch { real: usize, imag: usize },
    /// At least DC plus the fundamental are required
    TooFewCoefficients { len: usize },
    /// A coefficient was NaN or infinite
    NonFinite { index: usize },
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveError::LengthMismatch { real, imag } => write!(
                f,
                "Coefficient length mismatch: {} real vs {} imag",
                real, imag
            ),
            WaveError::TooFewCoefficients { len } => write!(
                f,
                "Periodic wave needs at least 2 coefficients, got {}",
                len
            ),
            WaveError::NonFinite { index } => {
                write!(f, "Coefficient at index {} is not finite", index)
            }
        }
    }
}

impl std::error::Error for WaveError {}

/// Built-in waveform shapes, selectable by name.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavePreset {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl WavePreset {
    /// Harmonic count used when building the truncated series.
    pub const HARMONICS: usize = 32;

    pub fn build(self) -> PeriodicWave {
        match self {
            WavePreset::Sine => PeriodicWave::sine(),
            WavePreset::Square => PeriodicWave::square(Self::HARMONICS),
            WavePreset::Sawtooth => PeriodicWave::sawtooth(Self::HARMONICS),
            WavePreset::Triangle => PeriodicWave::triangle(Self::HARMONICS),
        }
    }
}

impl std::str::FromStr for WavePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sine" => Ok(WavePreset::Sine),
            "square" => Ok(WavePreset::Square),
            "saw" | "sawtooth" => Ok(WavePreset::Sawtooth),
            "triangle" => Ok(WavePreset::Triangle),
            other => Err(format!("unknown wave preset '{}'", other)),
        }
    }
}

impl PeriodicWave {
    /// Build a normalised wave from cosine (`real`) and sine (`imag`) terms.
    pub fn new(real: &[f32], imag: &[f32]) -> Result<Self, WaveError> {
        Self::with_normalization(real, imag, true)
    }

    pub fn with_normalization(
        real: &[f32],
        imag: &[f32],
        normalize: bool,
    ) -> Result<Self, WaveError> {
        if real.len() != imag.len() {
            return Err(WaveError::LengthMismatch {
                real: real.len(),
                imag: imag.len(),
            });
        }
        if real.len() < 2 {
            return Err(WaveError::TooFewCoefficients { len: real.len() });
        }
        if let Some(index) = real
            .iter()
            .zip(imag)
            .position(|(re, im)| !re.is_finite() || !im.is_finite())
        {
            return Err(WaveError::NonFinite { index });
        }

        let mut table: Vec<f32> = (0..TABLE_SIZE)
            .map(|i| {
                let phase = i as f64 / TABLE_SIZE as f64;
                real.iter()
                    .zip(imag)
                    .enumerate()
                    .skip(1)
                    .map(|(k, (&re, &im))| {
                        let angle = TAU * k as f64 * phase;
                        re as f64 * angle.cos() + im as f64 * angle.sin()
                    })
                    .sum::<f64>() as f32
            })
            .collect();

        if normalize {
            let peak = table.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
            // All-zero coefficients stay silent
            if peak > 0.0 {
                for sample in &mut table {
                    *sample /= peak;
                }
            }
        }

        Ok(Self {
            table,
            harmonics: real.len() - 1,
        })
    }

    /// Sine-series amplitudes for harmonics 1..=n.
    ///
    /// `amplitudes[0]` is the fundamental, `amplitudes[1]` the 2nd harmonic,
    /// and so on. An empty slice yields a silent wave.
    pub fn from_harmonics(amplitudes: &[f32]) -> Self {
        let mut imag = Vec::with_capacity(amplitudes.len() + 1);
        imag.push(0.0);
        imag.extend_from_slice(amplitudes);
        if imag.len() < 2 {
            imag.push(0.0);
        }
        let real = vec![0.0; imag.len()];
        Self::from_series(&real, &imag)
    }

    pub fn sine() -> Self {
        Self::from_series(&[0.0, 0.0], &[0.0, 1.0])
    }

    /// Process-wide sine table, built on first use.
    ///
    /// Fresh oscillators read this until given their own wave, so creating
    /// one never synthesises a table.
    pub fn shared_sine() -> Arc<Self> {
        static SINE: OnceLock<Arc<PeriodicWave>> = OnceLock::new();
        Arc::clone(SINE.get_or_init(|| Arc::new(PeriodicWave::sine())))
    }

    /// Odd harmonics at 1/k.
    pub fn square(harmonics: usize) -> Self {
        Self::from_fn(harmonics, |k| if k % 2 == 1 { 1.0 / k as f32 } else { 0.0 })
    }

    /// All harmonics at 1/k, alternating sign.
    pub fn sawtooth(harmonics: usize) -> Self {
        Self::from_fn(harmonics, |k| {
            let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
            sign / k as f32
        })
    }

    /// Odd harmonics at 1/k², alternating sign.
    pub fn triangle(harmonics: usize) -> Self {
        Self::from_fn(harmonics, |k| {
            if k % 2 == 0 {
                return 0.0;
            }
            let sign = if (k / 2) % 2 == 0 { 1.0 } else { -1.0 };
            sign / (k * k) as f32
        })
    }

    fn from_fn(harmonics: usize, amplitude: impl Fn(usize) -> f32) -> Self {
        let amplitudes: Vec<f32> = (1..=harmonics.max(1)).map(amplitude).collect();
        Self::from_harmonics(&amplitudes)
    }

    // Coefficients built internally are always finite and equal length.
    fn from_series(real: &[f32], imag: &[f32]) -> Self {
        match Self::new(real, imag) {
            Ok(wave) => wave,
            Err(_) => Self {
                table: vec![0.0; TABLE_SIZE],
                harmonics: 0,
            },
        }
    }

    /// Read the wave at `phase` (in cycles) with linear interpolation.
    #[inline]
    pub fn sample(&self, phase: f32) -> f32 {
        let pos = phase.rem_euclid(1.0) * TABLE_SIZE as f32;
        let index = (pos as usize).min(TABLE_SIZE - 1);
        let frac = pos - index as f32;
        let a = self.table[index];
        let b = self.table[(index + 1) % TABLE_SIZE];
        a + (b - a) * frac
    }

    /// Number of harmonics described (excluding DC).
    pub fn harmonics(&self) -> usize {
        self.harmonics
    }

    pub fn table(&self) -> &[f32] {
        &self.table
    }

    /// Largest absolute value in the table.
    pub fn peak(&self) -> f32 {
        self.table.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU as TAU32;

    #[test]
    fn sine_matches_sin() {
        let wave = PeriodicWave::sine();
        for &phase in &[0.0f32, 0.1, 0.25, 0.6, 0.999] {
            let expected = (TAU32 * phase).sin();
            let actual = wave.sample(phase);
            assert!(
                (actual - expected).abs() < 1e-4,
                "phase {phase}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn normalised_waves_peak_at_one() {
        for preset in [
            WavePreset::Sine,
            WavePreset::Square,
            WavePreset::Sawtooth,
            WavePreset::Triangle,
        ] {
            let peak = preset.build().peak();
            assert!((peak - 1.0).abs() < 1e-6, "{preset:?} peak was {peak}");
        }
    }

    #[test]
    fn disabled_normalisation_keeps_amplitude() {
        let wave = PeriodicWave::with_normalization(&[0.0, 0.0], &[0.0, 0.5], false).unwrap();
        assert!((wave.peak() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn dc_term_is_ignored() {
        let wave = PeriodicWave::new(&[3.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(wave.sample(0.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_coefficients() {
        assert_eq!(
            PeriodicWave::new(&[0.0, 0.0], &[0.0]),
            Err(WaveError::LengthMismatch { real: 2, imag: 1 })
        );
        assert_eq!(
            PeriodicWave::new(&[0.0], &[0.0]),
            Err(WaveError::TooFewCoefficients { len: 1 })
        );
        assert_eq!(
            PeriodicWave::new(&[0.0, f32::NAN], &[0.0, 1.0]),
            Err(WaveError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn shared_sine_is_built_once() {
        let a = PeriodicWave::shared_sine();
        let b = PeriodicWave::shared_sine();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, PeriodicWave::sine());
    }

    #[test]
    fn empty_harmonics_are_silent() {
        let wave = PeriodicWave::from_harmonics(&[]);
        assert_eq!(wave.peak(), 0.0);
    }

    #[test]
    fn sample_wraps_phase() {
        let wave = PeriodicWave::sine();
        assert!((wave.sample(1.25) - wave.sample(0.25)).abs() < 1e-6);
        assert!((wave.sample(-0.75) - wave.sample(0.25)).abs() < 1e-6);
    }

    #[test]
    fn preset_names_parse() {
        assert_eq!("Square".parse::<WavePreset>(), Ok(WavePreset::Square));
        assert_eq!("saw".parse::<WavePreset>(), Ok(WavePreset::Sawtooth));
        assert!("organ".parse::<WavePreset>().is_err());
    }
}
