//! Reusable observers for the gyrocourse simulation engine.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any engine whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`] holds the capability traits for engine-agnostic observers
//!   ([`HasSample`], [`CanStopEarly`]).
//!
//! [`Cancellation`] stops a run from another thread through a shared flag.
//!
//! # Features
//!
//! - `plot` enables [`PlotObserver`] for visualizing a run via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: gyrocourse_core::Observer
//! [`HasSample`]: traits::HasSample
//! [`CanStopEarly`]: traits::CanStopEarly

mod cancel;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use cancel::Cancellation;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
