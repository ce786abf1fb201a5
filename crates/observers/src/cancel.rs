use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use gyrocourse_core::Observer;

use crate::traits::CanStopEarly;

/// An observer that stops a run once cancellation has been requested.
///
/// The flag is shared through an [`Arc`], so a clone held by another thread
/// can call [`cancel`](Self::cancel) while the run is stepping on a worker.
/// The flag is checked once per event.
///
/// # Example
///
/// ```
/// use gyrocourse_core::ParameterSet;
/// use gyrocourse_observers::Cancellation;
/// use gyrocourse_solvers::lateral::{self, RunOptions, Status};
///
/// let cancel = Cancellation::new();
/// cancel.cancel();
///
/// let solution = lateral::run(&ParameterSet::default(), &RunOptions::default(), cancel.clone())?;
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert_eq!(solution.steps(), 1);
/// # Ok::<(), lateral::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    requested: Arc<AtomicBool>,
}

impl Cancellation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every run observed by this flag or its clones.
    pub fn cancel(&self) {
        self.requested.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Cancellation {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_cancelled().then(A::stop_early)
    }
}
