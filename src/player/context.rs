use crate::{
    dsp::PeriodicWave,
    graph::{GraphNode, OscNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/// An audio clock plus the destination its nodes are summed into.
///
/// The clock is a frame counter that only moves when the context renders,
/// so every node scheduled against `current_time()` is sample-accurate
/// relative to every other node in the same context.
pub struct AudioContext {
    sample_rate: f32,
    frame: u64,
    nodes: Vec<OscNode>,
    temp_buffer: Vec<f32>,
}

impl AudioContext {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            frame: 0,
            nodes: Vec::new(),
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Frames rendered so far
    pub fn current_frame(&self) -> u64 {
        self.frame
    }

    /// Seconds rendered so far
    pub fn current_time(&self) -> f64 {
        self.frame as f64 / self.sample_rate as f64
    }

    /// New sine oscillator at 440 Hz, not yet connected or scheduled
    pub fn create_oscillator(&self) -> OscNode {
        OscNode::new(PeriodicWave::shared_sine())
    }

    /// Route a node to the destination. The context owns it from here on.
    pub fn connect(&mut self, node: OscNode) {
        self.nodes.push(node);
    }

    /// Nodes that have not finished yet
    pub fn nodes(&self) -> &[OscNode] {
        &self.nodes
    }

    pub fn oscillator_count(&self) -> usize {
        self.nodes.len()
    }

    /// True once no connected node will produce sound again
    pub fn is_idle(&self) -> bool {
        !self.nodes.iter().any(|n| n.is_active())
    }

    /// Render the sum of all nodes into `out` and advance the clock.
    pub fn render_block(&mut self, out: &mut [f32]) {
        out.fill(0.0);

        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            let ctx = RenderCtx::at_frame(self.sample_rate, self.frame);
            let temp = &mut self.temp_buffer[..chunk.len()];

            for node in &mut self.nodes {
                node.render_block(temp, &ctx);
                for (o, v) in chunk.iter_mut().zip(temp.iter()) {
                    *o += v;
                }
            }

            self.frame += chunk.len() as u64;
        }

        self.nodes.retain(|n| n.is_active());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn scheduled(context: &AudioContext, frequency: f32, start: f64, stop: f64) -> OscNode {
        let mut osc = context.create_oscillator();
        osc.set_frequency(frequency);
        osc.start(start);
        osc.stop(stop);
        osc
    }

    #[test]
    fn clock_advances_with_rendering() {
        let mut context = AudioContext::new(SAMPLE_RATE);
        assert_eq!(context.current_time(), 0.0);

        let mut out = vec![0.0f32; 250];
        context.render_block(&mut out);
        assert_eq!(context.current_frame(), 250);
        assert_eq!(context.current_time(), 0.25);
    }

    #[test]
    fn empty_context_is_silent_and_idle() {
        let mut context = AudioContext::new(SAMPLE_RATE);
        let mut out = vec![1.0f32; 64];
        context.render_block(&mut out);
        assert!(context.is_idle());
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn nodes_sum_into_destination() {
        let mut context = AudioContext::new(SAMPLE_RATE);
        let a = scheduled(&context, 125.0, 0.0, 1.0);
        let b = scheduled(&context, 125.0, 0.0, 1.0);
        context.connect(a);
        context.connect(b);

        let mut out = vec![0.0f32; 8];
        context.render_block(&mut out);
        // Two in-phase sines: quarter cycle peaks at 2.0
        assert!((out[2] - 2.0).abs() < 1e-4);
    }

    #[test]
    fn finished_nodes_are_dropped() {
        let mut context = AudioContext::new(SAMPLE_RATE);
        let osc = scheduled(&context, 200.0, 0.0, 0.1);
        context.connect(osc);
        assert_eq!(context.oscillator_count(), 1);
        assert!(!context.is_idle());

        let mut out = vec![0.0f32; 100];
        context.render_block(&mut out);
        assert_eq!(context.oscillator_count(), 0);
        assert!(context.is_idle());
    }

    #[test]
    fn blocks_longer_than_max_are_chunked() {
        let mut context = AudioContext::new(48_000.0);
        let osc = scheduled(&context, 440.0, 0.0, 1.0);
        context.connect(osc);

        let mut long = vec![0.0f32; MAX_BLOCK_SIZE * 2 + 17];
        context.render_block(&mut long);
        assert_eq!(context.current_frame(), long.len() as u64);
        assert!(long[MAX_BLOCK_SIZE + 1..].iter().any(|&s| s.abs() > 0.1));
    }
}
