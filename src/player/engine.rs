use crate::{
    player::{context::AudioContext, message::ContextQueue, EngineConfig},
    MAX_BLOCK_SIZE,
};

/// Audio-thread side of the player.
///
/// Picks up scheduled contexts from its queue at the top of every block and
/// mixes every live one into the output. All buffers are sized in `new`, so
/// `render_block` neither allocates nor frees: finished and rejected
/// contexts are handed back through the queue.
pub struct RingtoneEngine<Q: ContextQueue> {
    queue: Q,
    contexts: Vec<AudioContext>,
    temp_buffer: Vec<f32>,
    max_contexts: usize,
    gain: f32,
    sample_rate: f32,
}

impl<Q: ContextQueue> RingtoneEngine<Q> {
    pub fn new(config: EngineConfig, queue: Q) -> Self {
        Self {
            queue,
            contexts: Vec::with_capacity(config.max_contexts),
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
            max_contexts: config.max_contexts,
            gain: config.gain,
            sample_rate: config.sample_rate,
        }
    }

    pub fn render_block(&mut self, out: &mut [f32]) {
        // Pick up new ringtones
        while let Some(context) = self.queue.pop() {
            if context.is_idle() || self.contexts.len() >= self.max_contexts {
                self.retire(context);
                continue;
            }
            self.contexts.push(context);
        }

        // Mix contexts
        out.fill(0.0);
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            let temp = &mut self.temp_buffer[..chunk.len()];
            for context in &mut self.contexts {
                context.render_block(temp);
                for (o, v) in chunk.iter_mut().zip(temp.iter()) {
                    *o += v * self.gain;
                }
            }
        }

        let mut i = 0;
        while i < self.contexts.len() {
            if self.contexts[i].is_idle() {
                let finished = self.contexts.swap_remove(i);
                self.retire(finished);
            } else {
                i += 1;
            }
        }
    }

    fn retire(&mut self, context: AudioContext) {
        // Return queue full: freed here instead
        let _ = self.queue.retire(context);
    }

    /// Ringtones still playing or waiting to start
    pub fn active_contexts(&self) -> usize {
        self.contexts.len()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}
