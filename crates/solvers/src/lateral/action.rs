/// Control actions supported by the lateral engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run and return the steps recorded so far.
    StopEarly,
}
