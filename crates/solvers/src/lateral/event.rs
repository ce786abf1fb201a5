use gyrocourse_core::StateVector;

use super::Sample;

/// Event emitted by the lateral engine after each recorded step.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Zero-based index of the recorded step.
    pub step: usize,

    /// The outputs appended to the result for this step.
    pub sample: Sample,

    /// The full state after integration.
    pub state: StateVector,
}
