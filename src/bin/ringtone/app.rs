//! Ringtone - player builder and runner

use std::time::Duration;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use ringtone::{
    dsp::{PeriodicWave, WavePreset},
    io::converter::mono_to_interleaved,
    player::{channel, RingtoneRequest},
    sequencing::{Note, Schedule},
    EngineConfig, RingtoneEngine, MAX_BLOCK_SIZE,
};

/// Time to keep the stream open after the last note, so the device
/// buffer drains before exit.
const TAIL_SECONDS: f64 = 0.25;

/// Main application builder
pub struct Ringtone {
    wave: PeriodicWave,
    gain: f32,
    max_contexts: usize,
}

impl Ringtone {
    pub fn new() -> Self {
        Self {
            wave: WavePreset::Triangle.build(),
            gain: 0.5,
            max_contexts: EngineConfig::default().max_contexts,
        }
    }

    /// Set the oscillator waveform
    pub fn wave(mut self, wave: PeriodicWave) -> Self {
        self.wave = wave;
        self
    }

    /// Set the output gain (linear)
    pub fn gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    /// Play `notes` once and return when they have finished
    pub fn run(self, notes: Vec<Note>) -> EyreResult<()> {
        // Set up audio
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let schedule = Schedule::from_notes(&notes);
        let playback = playback_time(schedule.span)?;

        println!("=== Ringtone ===");
        println!("Sample rate: {} Hz", sample_rate);
        println!("Channels: {}", channels);
        println!("Harmonics: {}", self.wave.harmonics());
        println!();
        for entry in &schedule {
            println!(
                "  {:>8.2} Hz  at {:>6.3}s  for {:.3}s",
                entry.frequency, entry.offset, entry.duration
            );
        }
        println!();
        println!("Total duration: {:.3}s", schedule.span);

        let engine_config = EngineConfig {
            sample_rate,
            max_contexts: self.max_contexts,
            gain: self.gain,
        };
        let (mut sender, queue) = channel(&engine_config, self.wave);
        let mut engine = RingtoneEngine::new(engine_config, queue);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames_to_render];
                    engine.render_block(block);

                    // Copy to output (mono to all channels)
                    let out_off = frames_written * channels;
                    mono_to_interleaved(block, &mut data[out_off..], channels);

                    frames_written += frames_to_render;
                }
            },
            |err| eprintln!("Audio error: {}", err),
            None,
        )?;

        stream.play()?;

        sender
            .send(&RingtoneRequest::new(notes))
            .wrap_err("failed to queue ringtone")?;

        println!("Playing...");
        std::thread::sleep(playback);
        sender.collect();

        Ok(())
    }
}

/// How long to keep the stream open for a schedule spanning `span` seconds
fn playback_time(span: f64) -> EyreResult<Duration> {
    Duration::try_from_secs_f64(span.max(0.0) + TAIL_SECONDS).wrap_err("ringtone too long")
}

impl Default for Ringtone {
    fn default() -> Self {
        Self::new()
    }
}
