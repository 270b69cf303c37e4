use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{player::context::AudioContext, sequencing::Note};

/// One ringtone to play: an ordered note sequence.
///
/// With the `serde` feature this is a bare array of
/// `{ "frequency": .., "duration": .. }` objects.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingtoneRequest {
    pub notes: Vec<Note>,
}

impl RingtoneRequest {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

impl From<Vec<Note>> for RingtoneRequest {
    fn from(notes: Vec<Note>) -> Self {
        Self::new(notes)
    }
}

impl FromIterator<Note> for RingtoneRequest {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Audio-thread side of the hand-off between host and engine.
///
/// Contexts arrive fully scheduled, so taking one never allocates. Finished
/// contexts go back through `retire` to be freed elsewhere.
pub trait ContextQueue {
    fn pop(&mut self) -> Option<AudioContext>;

    /// Hand back a context the engine is done with.
    ///
    /// `Err` returns it when there is nowhere to send it; the engine then
    /// drops it in place.
    fn retire(&mut self, context: AudioContext) -> Result<(), AudioContext> {
        Err(context)
    }
}

/// Offline queue: everything is dropped where it finishes.
impl ContextQueue for VecDeque<AudioContext> {
    fn pop(&mut self) -> Option<AudioContext> {
        self.pop_front()
    }
}
