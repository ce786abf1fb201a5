//! Core types for lateral course-hold simulation.
//!
//! This crate defines the shared data that the simulation engine and its
//! observers build on:
//!
//! - [`ParameterSet`] holds the physical, aerodynamic, and control-law
//!   constants for one aircraft and flight condition.
//! - [`CoefficientSet`] holds the stability and control coefficients derived
//!   once from a [`ParameterSet`], plus the trim angle of attack.
//! - [`StateVector`] and [`DerivativeVector`] are the ten-slot simulation state
//!   and its rate of change, indexed by [`Slot`].
//! - [`StepIntegrable`] steps a state forward by `derivative * delta`.
//! - [`Observer`] receives engine events and optionally returns control actions.

mod coefficients;
mod observer;
mod params;
mod state;
mod step;

pub use coefficients::{CoefficientSet, DEG_PER_RAD, trim_angle_of_attack};
pub use observer::Observer;
pub use params::{ParameterError, ParameterSet};
pub use state::{DerivativeVector, STATE_LEN, Slot, StateVector};
pub use step::{DerivativeOf, StepIntegrable};
