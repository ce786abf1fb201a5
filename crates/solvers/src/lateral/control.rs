//! The course-hold control law and the coupled equations of motion.

use gyrocourse_core::{CoefficientSet, DerivativeVector, ParameterSet, Slot, StateVector};

use super::{Damper, Mode, RunOptions};

/// Heading the run starts from.
pub const INITIAL_HEADING: f64 = 0.0;

/// Course change commanded at the start of every run.
pub const HEADING_STEP: f64 = 10.0;

/// Saturation of the heading-error term fed to the commanded-bank filter.
pub const HEADING_ERROR_LIMIT: f64 = 14.0;

/// Saturation of the automatic aileron command.
pub const AILERON_LIMIT: f64 = 12.0;

/// Saturation of the automatic rudder command.
pub const RUDDER_LIMIT: f64 = 10.0;

/// Surface commands for one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Controls {
    /// Aileron command `δe`.
    pub aileron: f64,

    /// Rudder command `δn`.
    pub rudder: f64,
}

/// Returns the gyro-compass heading error, saturated to ±[`HEADING_ERROR_LIMIT`].
#[must_use]
pub fn heading_error(state: &StateVector, target: f64) -> f64 {
    (state[Slot::GyroHeading] - target).clamp(-HEADING_ERROR_LIMIT, HEADING_ERROR_LIMIT)
}

/// Evaluates the control law at time `t`.
///
/// In automatic mode the aileron follows the filtered roll-rate command plus
/// bank-error feedback, and the rudder follows the filtered yaw-rate command
/// unless the damper has failed. Both are saturated. In manual mode the
/// configured deflections are applied unsaturated while `t < duration` and
/// zero afterwards.
#[must_use]
pub fn control_law(
    state: &StateVector,
    params: &ParameterSet,
    options: &RunOptions,
    t: f64,
) -> Controls {
    match options.mode {
        Mode::Automatic => {
            let aileron = (state[Slot::AileronFilter]
                + params.bank_gain * (state[Slot::Bank] - state[Slot::BankCommand]))
                .clamp(-AILERON_LIMIT, AILERON_LIMIT);
            let rudder = match options.damper {
                Damper::Failed => 0.0,
                Damper::Enabled => state[Slot::RudderFilter].clamp(-RUDDER_LIMIT, RUDDER_LIMIT),
            };
            Controls { aileron, rudder }
        }
        Mode::Manual => {
            let active = t < options.manual.duration;
            Controls {
                aileron: if active { options.manual.aileron } else { 0.0 },
                rudder: if active { options.manual.rudder } else { 0.0 },
            }
        }
    }
}

/// Recomputes the derivative vector in place from the current state.
///
/// Slots are written in index order and later slots read the ones already
/// written. Slot 1 reads slot 2 before it is rewritten, so the heading
/// acceleration couples to the bank rate left by the previous step.
pub fn update_derivative(
    derivative: &mut DerivativeVector,
    state: &StateVector,
    c: &CoefficientSet,
    params: &ParameterSet,
    controls: Controls,
    heading_error: f64,
) {
    use Slot::{
        AileronFilter, Bank, BankCommand, BankRate, GyroHeading, Heading, HeadingRate,
        LateralDeviation, RudderFilter, Sideslip,
    };

    let Controls {
        aileron: de,
        rudder: dn,
    } = controls;
    let d = derivative;
    let s = state;

    d[Heading] = s[HeadingRate];
    d[HeadingRate] = -c.a(1) * d[Heading] - c.b(6) * d[Bank] - c.a(2) * s[Sideslip]
        - c.a(3) * dn
        - c.b(5) * de;
    d[Bank] = s[BankRate];
    d[BankRate] = -c.b(1) * d[Bank] - c.a(6) * d[Heading] - c.b(2) * s[Sideslip]
        - c.a(5) * dn
        - c.b(3) * de;
    d[Sideslip] =
        d[Heading] + c.b(4) * s[Bank] + c.b(7) * d[Bank] - c.a(4) * s[Sideslip] - c.a(7) * dn;
    d[LateralDeviation] = -c.c6() * (s[Heading] - s[Sideslip]);
    d[GyroHeading] = (-s[Heading] / params.heading_lag) - (s[GyroHeading] / params.heading_lag);
    d[BankCommand] = ((-heading_error * params.bank_to_heading_gain) / params.bank_to_heading_lag)
        - (s[BankCommand] / params.bank_to_heading_lag);
    d[AileronFilter] = params.roll_rate_gain * s[BankRate] - s[AileronFilter] / params.roll_rate_lag;
    d[RudderFilter] = params.yaw_rate_gain * s[HeadingRate] - s[RudderFilter] / params.yaw_rate_lag;
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::lateral::ManualInput;

    fn state_with(values: &[(Slot, f64)]) -> StateVector {
        let mut state = StateVector::default();
        for &(slot, value) in values {
            state[slot] = value;
        }
        state
    }

    #[test]
    fn heading_error_saturates_both_ways() {
        let target = INITIAL_HEADING + HEADING_STEP;

        assert_relative_eq!(heading_error(&StateVector::default(), target), -10.0);
        assert_relative_eq!(
            heading_error(&state_with(&[(Slot::GyroHeading, -30.0)]), target),
            -14.0
        );
        assert_relative_eq!(
            heading_error(&state_with(&[(Slot::GyroHeading, 40.0)]), target),
            14.0
        );
    }

    #[test]
    fn automatic_aileron_combines_filter_and_bank_error() {
        let params = ParameterSet::default();
        let options = RunOptions::default();
        let state = state_with(&[
            (Slot::AileronFilter, 0.5),
            (Slot::Bank, 2.0),
            (Slot::BankCommand, 1.0),
            (Slot::RudderFilter, 3.0),
        ]);

        let controls = control_law(&state, &params, &options, 0.0);

        assert_relative_eq!(controls.aileron, 0.5 + 2.0 * (2.0 - 1.0));
        assert_relative_eq!(controls.rudder, 3.0);
    }

    #[test]
    fn automatic_commands_saturate() {
        let params = ParameterSet::default();
        let options = RunOptions::default();
        let state = state_with(&[(Slot::Bank, 100.0), (Slot::RudderFilter, -50.0)]);

        let controls = control_law(&state, &params, &options, 0.0);

        assert_relative_eq!(controls.aileron, AILERON_LIMIT);
        assert_relative_eq!(controls.rudder, -RUDDER_LIMIT);
    }

    #[test]
    fn failed_damper_zeroes_rudder() {
        let params = ParameterSet::default();
        let options = RunOptions::default().with_damper(Damper::Failed);
        let state = state_with(&[(Slot::RudderFilter, 4.0)]);

        let controls = control_law(&state, &params, &options, 0.0);

        assert_eq!(controls.rudder, 0.0);
    }

    #[test]
    fn manual_inputs_hold_then_release_without_clamping() {
        let params = ParameterSet::default();
        let options = RunOptions::default()
            .with_mode(Mode::Manual)
            .with_manual(ManualInput {
                aileron: 20.0,
                rudder: -15.0,
                duration: 1.0,
            });
        let state = state_with(&[(Slot::AileronFilter, 5.0), (Slot::RudderFilter, 5.0)]);

        let held = control_law(&state, &params, &options, 0.99);
        assert_relative_eq!(held.aileron, 20.0);
        assert_relative_eq!(held.rudder, -15.0);

        let released = control_law(&state, &params, &options, 1.0);
        assert_eq!(released, Controls::default());
    }

    #[test]
    fn zero_state_derivative_is_driven_only_by_heading_error() {
        let params = ParameterSet::default();
        let c = CoefficientSet::derive(&params);
        let mut derivative = DerivativeVector::default();

        update_derivative(
            &mut derivative,
            &StateVector::default(),
            &c,
            &params,
            Controls::default(),
            -10.0,
        );

        for slot in Slot::ALL {
            if slot == Slot::BankCommand {
                assert_relative_eq!(derivative[slot], 10.0 * 2.0 / 0.1, epsilon = 1e-9);
            } else {
                assert_eq!(derivative[slot], 0.0, "slot {slot:?}");
            }
        }
    }

    #[test]
    fn heading_acceleration_reads_previous_bank_rate() {
        let params = ParameterSet::default();
        let c = CoefficientSet::derive(&params);
        let state = state_with(&[(Slot::BankRate, 1.0)]);

        let mut stale = DerivativeVector::default();
        stale[Slot::Bank] = 3.0;
        update_derivative(&mut stale, &state, &c, &params, Controls::default(), 0.0);

        assert_relative_eq!(stale[Slot::HeadingRate], -c.b(6) * 3.0);
        assert_relative_eq!(stale[Slot::Bank], 1.0);
        assert_relative_eq!(stale[Slot::BankRate], -c.b(1) * 1.0);
    }

    #[test]
    fn surface_deflections_feed_moment_equations() {
        let params = ParameterSet::default();
        let c = CoefficientSet::derive(&params);
        let controls = Controls {
            aileron: 2.0,
            rudder: 1.0,
        };
        let mut derivative = DerivativeVector::default();

        update_derivative(
            &mut derivative,
            &StateVector::default(),
            &c,
            &params,
            controls,
            0.0,
        );

        assert_relative_eq!(
            derivative[Slot::HeadingRate],
            -c.a(3) * 1.0 - c.b(5) * 2.0
        );
        assert_relative_eq!(derivative[Slot::BankRate], -c.a(5) * 1.0 - c.b(3) * 2.0);
        assert_relative_eq!(derivative[Slot::Sideslip], -c.a(7) * 1.0);
    }
}
