/// Convert MIDI note number to frequency in Hz.
/// A4 = 440 Hz = MIDI note 69
pub fn midi_note_to_freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}

/// Copy a mono block into an interleaved buffer, duplicating each sample
/// across `channels`.
///
/// Writes `min(block.len(), data.len() / channels)` frames.
pub fn mono_to_interleaved(block: &[f32], data: &mut [f32], channels: usize) {
    if channels == 0 {
        return;
    }
    for (frame, &sample) in data.chunks_exact_mut(channels).zip(block) {
        frame.fill(sample);
    }
}
