//! Time-stepping engines for lateral course-hold simulation.
//!
//! # Engines
//!
//! - [`lateral`] runs a fixed-step simulation of bank, heading, and sideslip
//!   under the gyroscopic course-hold control law, with a choice of
//!   integration scheme.
//!
//! Engines take an [`Observer`] that sees every recorded step and can stop the
//! run early. Pass `()` when no observation is needed.
//!
//! [`Observer`]: gyrocourse_core::Observer

pub mod lateral;
