/// Context passed to graph nodes during rendering
///
/// Contains information about what to render:
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - frequency: Pitch to render (Hz)
/// - frame: Audio clock position of the first sample in the block
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
    pub frame: u64,
}

impl RenderCtx {
    /// Create context for a block starting at `frame` on the audio clock
    pub fn at_frame(sample_rate: f32, frame: u64) -> Self {
        Self {
            sample_rate,
            frequency: 0.0,
            frame,
        }
    }

    /// Create context from direct frequency, positioned at the clock origin
    pub fn from_freq(sample_rate: f32, frequency: f32) -> Self {
        Self {
            frequency,
            ..Self::at_frame(sample_rate, 0)
        }
    }
}

/// Convert a time in seconds on the audio clock to a sample frame.
///
/// Rounds to the nearest frame so that back-to-back notes whose offsets
/// are running sums of durations land on shared frame boundaries. Negative
/// times clamp to the clock origin.
#[inline]
pub fn seconds_to_frame(seconds: f64, sample_rate: f32) -> u64 {
    let frame = (seconds * sample_rate as f64).round();
    if frame.is_nan() || frame <= 0.0 {
        0
    } else {
        frame as u64
    }
}

/// Core trait for audio processing graph nodes
pub trait GraphNode: Send {
    /// Render `out.len()` samples starting at `ctx.frame`.
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Check if this node is still producing (or scheduled to produce) sound
    ///
    /// Used by the audio context to know when a node can be dropped.
    fn is_active(&self) -> bool {
        true
    }
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
