//! Fixed-step lateral simulation under the gyroscopic course-hold control law.
//!
//! # Algorithm
//!
//! Coefficients are derived once from the [`ParameterSet`]. Starting from an
//! all-zero [`StateVector`] at `t = 0`, each step while `t < t_end`:
//!
//! 1. Computes the saturated gyro-compass heading error against a fixed target
//!    of [`INITIAL_HEADING`] + [`HEADING_STEP`].
//! 2. Evaluates the control law for the aileron and rudder commands.
//! 3. Recomputes the derivative vector from the state, coefficients, and
//!    commands.
//! 4. Advances the state with the selected [`Scheme`].
//! 5. Records a [`Sample`] and emits an [`Event`] to the observer.
//! 6. Advances `t` by adding `dt`.
//!
//! Time accumulates by repeated addition, so rounding decides whether a step
//! landing near `t_end` is taken: `t_end = 1, dt = 0.1` records 11 steps.
//!
//! # Observer
//!
//! The observer receives an [`Event`] after each recorded step and may return
//! [`Action::StopEarly`] to end the run. The result then holds every step
//! recorded so far, identical to the prefix of an uninterrupted run.
//!
//! # Example
//!
//! ```
//! use gyrocourse_core::ParameterSet;
//! use gyrocourse_solvers::lateral::{self, RunOptions, Status};
//!
//! let solution = lateral::run_unobserved(&ParameterSet::default(), &RunOptions::new(1.0, 0.01))?;
//!
//! assert_eq!(solution.status, Status::Complete);
//! assert_eq!(solution.steps(), 100);
//! # Ok::<(), lateral::Error>(())
//! ```

mod action;
mod control;
mod error;
mod event;
mod options;
mod scheme;
mod solution;

pub use action::Action;
pub use control::{
    AILERON_LIMIT, Controls, HEADING_ERROR_LIMIT, HEADING_STEP, INITIAL_HEADING, RUDDER_LIMIT,
    control_law, heading_error, update_derivative,
};
pub use error::Error;
pub use event::Event;
pub use options::{ConfigError, Damper, ManualInput, Mode, RunOptions, Scheme};
pub use scheme::{HALF_STEP, step_first_order, step_second_order};
pub use solution::{Sample, Series, SimulationResult, Solution, Status};

use gyrocourse_core::{CoefficientSet, DerivativeVector, Observer, ParameterSet, Slot, StateVector};

/// Runs a simulation, deriving coefficients from `params`.
///
/// See the [module docs](self) for the per-step algorithm and observer timing.
///
/// # Errors
///
/// Returns an error before any step executes if `options` or `params` fail
/// validation.
pub fn run<Obs>(
    params: &ParameterSet,
    options: &RunOptions,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    options.validate()?;
    params.validate()?;
    let coefficients = CoefficientSet::derive(params);
    run_with(&coefficients, params, options, observer)
}

/// Runs a simulation without observation.
///
/// This is a convenience wrapper around [`run`] that discards events.
///
/// # Errors
///
/// Returns an error if `options` or `params` fail validation.
pub fn run_unobserved(params: &ParameterSet, options: &RunOptions) -> Result<Solution, Error> {
    run(params, options, ())
}

/// Runs a simulation with coefficients derived by the caller.
///
/// Lets one [`CoefficientSet`] serve many runs, for example a sweep over
/// control-law gains that leave the aerodynamics unchanged. The caller is
/// responsible for having derived `coefficients` from a validated `params`.
///
/// # Errors
///
/// Returns an error before any step executes if `options` fail validation.
pub fn run_with<Obs>(
    coefficients: &CoefficientSet,
    params: &ParameterSet,
    options: &RunOptions,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    options.validate()?;

    let heading_target = INITIAL_HEADING + HEADING_STEP;
    let mut state = StateVector::default();
    let mut derivative = DerivativeVector::default();
    let mut result = SimulationResult::with_capacity(
        expected_steps(options),
        coefficients.trim_angle_of_attack(),
    );

    let mut t = 0.0;
    while t < options.t_end {
        let heading_error = heading_error(&state, heading_target);
        let controls = control_law(&state, params, options, t);
        update_derivative(
            &mut derivative,
            &state,
            coefficients,
            params,
            controls,
            heading_error,
        );

        state = match options.scheme {
            Scheme::FirstOrder => step_first_order(&derivative, &state, options.dt),
            Scheme::SecondOrder => step_second_order(
                &derivative,
                &state,
                HALF_STEP,
                coefficients,
                controls,
                params,
                heading_error,
            ),
        };

        let sample = Sample {
            time: t,
            bank: state[Slot::Bank],
            bank_rate: derivative[Slot::Bank],
            heading: state[Slot::Heading],
            heading_rate: derivative[Slot::Heading],
            sideslip: state[Slot::Sideslip],
            aileron: controls.aileron,
            rudder: controls.rudder,
        };
        result.push(&sample);

        let event = Event {
            step: result.len() - 1,
            sample,
            state,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                result,
            });
        }

        t += options.dt;
    }

    Ok(Solution {
        status: Status::Complete,
        result,
    })
}

/// Upper bound on the steps reserved up front; longer runs grow as they go.
const MAX_PREALLOCATED_STEPS: usize = 1 << 16;

/// Capacity hint for the output sequences.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn expected_steps(options: &RunOptions) -> usize {
    let steps = (options.t_end / options.dt)
        .ceil()
        .min(MAX_PREALLOCATED_STEPS as f64) as usize;
    steps.saturating_add(1)
}
