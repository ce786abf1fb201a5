/// Receives engine events and decides how the run should proceed.
///
/// Observers let a host watch a simulation step by step or steer it without
/// changing the engine's API. Streaming results to a chart, checking a
/// cancellation flag, and stopping once a condition is met are all observers.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests an
/// engine-specific action and `None` lets the run continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes an engine event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
