//! Graph nodes that render on the audio clock.
//!
//! Nodes wrap the DSP primitives with scheduling: they know which sample
//! frames they are audible on and render silence everywhere else.

/// Core traits shared by all graph nodes.
pub mod node;
/// One-shot oscillator with start/stop times.
pub mod oscillator;

pub use node::{GraphNode, RenderCtx};
pub use oscillator::{OscNode, OscState};
