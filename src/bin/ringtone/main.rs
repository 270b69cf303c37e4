//! ringtone - play a note sequence on the default output device
//!
//! Run with: cargo run -- [--wave=<sine|square|sawtooth|triangle>] [--gain=G] [FREQ:DURATION ...]
//!
//! Without notes, a short built-in ringtone plays.

mod app;

use app::Ringtone;
use color_eyre::eyre::{Result, WrapErr};
use ringtone::{dsp::WavePreset, sequencing::Note};

fn default_ringtone() -> Vec<Note> {
    // E5 D5 F#4 G#4 C#5 B4 D4 E4
    [(76, 0.15), (74, 0.15), (66, 0.3), (68, 0.3), (73, 0.15), (71, 0.15), (62, 0.3), (64, 0.3)]
        .into_iter()
        .map(|(midi, duration)| Note::from_midi(midi, duration))
        .collect()
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut preset = WavePreset::Triangle;
    let mut gain = 0.5f32;
    let mut notes = Vec::new();

    for arg in std::env::args().skip(1) {
        if let Some(name) = arg.strip_prefix("--wave=") {
            preset = name
                .parse()
                .map_err(|e: String| color_eyre::eyre::eyre!(e))?;
        } else if let Some(value) = arg.strip_prefix("--gain=") {
            gain = value
                .parse()
                .wrap_err_with(|| format!("invalid gain '{}'", value))?;
        } else {
            let note: Note = arg
                .parse()
                .wrap_err_with(|| format!("invalid note argument '{}'", arg))?;
            notes.push(note);
        }
    }

    if notes.is_empty() {
        notes = default_ringtone();
    }

    Ringtone::new().wave(preset.build()).gain(gain).run(notes)
}
