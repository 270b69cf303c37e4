use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::io::converter::midi_note_to_freq;

/// A single tone: a frequency held for a duration.
///
/// Values are taken as given. Zero or negative durations and non-finite
/// frequencies are not rejected; they simply produce no sound.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Pitch in Hz
    pub frequency: f32,
    /// Length in seconds
    pub duration: f64,
}

impl Note {
    pub const fn new(frequency: f32, duration: f64) -> Self {
        Self {
            frequency,
            duration,
        }
    }

    /// Note from a MIDI note number (A4 = 69 = 440 Hz)
    pub fn from_midi(note: u8, duration: f64) -> Self {
        Self::new(midi_note_to_freq(note), duration)
    }
}

/// Errors from parsing `FREQ:DURATION` text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteParseError {
    /// No `:` separating frequency and duration
    MissingSeparator(String),
    InvalidFrequency(String),
    InvalidDuration(String),
}

impl fmt::Display for NoteParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteParseError::MissingSeparator(s) => {
                write!(f, "Expected FREQ:DURATION, got '{}'", s)
            }
            NoteParseError::InvalidFrequency(s) => write!(f, "Invalid frequency '{}'", s),
            NoteParseError::InvalidDuration(s) => write!(f, "Invalid duration '{}'", s),
        }
    }
}

impl std::error::Error for NoteParseError {}

impl FromStr for Note {
    type Err = NoteParseError;

    /// Parse `"440:0.5"` as 440 Hz for half a second.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (frequency, duration) = s
            .split_once(':')
            .ok_or_else(|| NoteParseError::MissingSeparator(s.to_string()))?;

        let frequency = frequency
            .trim()
            .parse::<f32>()
            .map_err(|_| NoteParseError::InvalidFrequency(frequency.to_string()))?;
        let duration = duration
            .trim()
            .parse::<f64>()
            .map_err(|_| NoteParseError::InvalidDuration(duration.to_string()))?;

        Ok(Self::new(frequency, duration))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.frequency, self.duration)
    }
}
