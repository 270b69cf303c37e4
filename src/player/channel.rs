//! Lock-free hand-off between the host thread and the audio thread.
//!
//! The host side turns each request into a scheduled `AudioContext` and
//! pushes it; the engine pops it in the audio callback. Finished contexts
//! travel back on a second ring buffer so their memory is released on the
//! host side as well.

use std::fmt;
use std::sync::Arc;

use rtrb::{Consumer, Producer, PushError, RingBuffer};

use crate::{
    dsp::PeriodicWave,
    player::{
        context::AudioContext, message::ContextQueue, message::RingtoneRequest,
        ringtone::RingtonePlayer, EngineConfig,
    },
};

/// Errors from queueing a ringtone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    /// The engine hasn't picked up earlier ringtones yet
    Full,
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Full => write!(f, "Ringtone queue is full"),
        }
    }
}

impl std::error::Error for SendError {}

/// Create a connected sender/queue pair sized for `config.max_contexts`.
pub fn channel(
    config: &EngineConfig,
    wave: impl Into<Arc<PeriodicWave>>,
) -> (RingtoneSender, EngineQueue) {
    let capacity = config.max_contexts.max(1);
    let (tx, rx) = RingBuffer::new(capacity);
    // Room for every live context plus a full queue of rejected ones
    let (retired_tx, retired_rx) = RingBuffer::new(capacity * 2);

    let sender = RingtoneSender {
        player: RingtonePlayer::new(config.sample_rate, wave),
        tx,
        retired: retired_rx,
    };
    let queue = EngineQueue {
        rx,
        retired: retired_tx,
    };
    (sender, queue)
}

/// Host side: schedules ringtones and frees finished ones
pub struct RingtoneSender {
    player: RingtonePlayer,
    tx: Producer<AudioContext>,
    retired: Consumer<AudioContext>,
}

impl RingtoneSender {
    /// Schedule `request` on a new context and queue it for the engine.
    ///
    /// Empty requests are accepted and dropped; they would play nothing.
    pub fn send(&mut self, request: &RingtoneRequest) -> Result<(), SendError> {
        self.collect();
        if request.notes.is_empty() {
            return Ok(());
        }

        let context = self.player.play(&request.notes);
        self.tx.push(context).map_err(|_| SendError::Full)
    }

    /// Drop contexts the engine has finished with. Returns how many.
    pub fn collect(&mut self) -> usize {
        let mut count = 0;
        while self.retired.pop().is_ok() {
            count += 1;
        }
        count
    }

    pub fn player(&self) -> &RingtonePlayer {
        &self.player
    }
}

/// Audio-thread side, handed to `RingtoneEngine`
pub struct EngineQueue {
    rx: Consumer<AudioContext>,
    retired: Producer<AudioContext>,
}

impl ContextQueue for EngineQueue {
    fn pop(&mut self) -> Option<AudioContext> {
        self.rx.pop().ok()
    }

    fn retire(&mut self, context: AudioContext) -> Result<(), AudioContext> {
        self.retired.push(context).map_err(|err| match err {
            PushError::Full(context) => context,
        })
    }
}
