//! Capability traits for engine-agnostic observers.
//!
//! These traits abstract over engine-specific event and action types, so an
//! observer written once works with any engine whose types implement them.
//!
//! # Event traits
//!
//! - [`HasSample`] for events that carry one recorded output sample
//!
//! # Action traits
//!
//! - [`CanStopEarly`] for actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use gyrocourse_core::Observer;
//! use gyrocourse_observers::traits::{CanStopEarly, HasSample};
//!
//! /// Stops once the bank angle exceeds a limit.
//! struct BankLimit(f64);
//!
//! impl<E: HasSample, A: CanStopEarly> Observer<E, A> for BankLimit {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.sample().bank.abs() > self.0).then(A::stop_early)
//!     }
//! }
//! ```

use gyrocourse_solvers::lateral::{self, Sample};

/// An event that carries one recorded output sample.
pub trait HasSample {
    /// Returns the sample recorded for this event.
    fn sample(&self) -> &Sample;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the engine early.
    fn stop_early() -> Self;
}

impl HasSample for lateral::Event {
    fn sample(&self) -> &Sample {
        &self.sample
    }
}

impl CanStopEarly for lateral::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
