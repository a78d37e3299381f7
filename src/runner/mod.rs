//! Command sequence execution.

pub mod sequence;

pub use sequence::{RunState, SequenceRunner, StepOutcome};
