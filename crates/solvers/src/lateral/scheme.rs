//! Integration step functions.
//!
//! Both functions are stateless: they take the current state and the
//! derivative evaluated at it, and return the next state.

use gyrocourse_core::{
    CoefficientSet, DerivativeVector, ParameterSet, Slot, StateVector, StepIntegrable,
};

use super::control::Controls;

/// Step length used by [`step_second_order`], s.
///
/// Independent of the run's `dt`: the second-order scheme always advances by
/// this amount per step while time is still counted in `dt`.
pub const HALF_STEP: f64 = 0.05;

/// Advances every slot by `derivative * dt` (explicit Euler).
#[must_use]
pub fn step_first_order(
    derivative: &DerivativeVector,
    state: &StateVector,
    dt: f64,
) -> StateVector {
    state.step(*derivative, dt)
}

/// Advances the state with the single-evaluation predictor.
///
/// Each slot's rate is re-evaluated from its coupling equation at a point
/// advanced by `half_step / 2` along the current derivative, without a second
/// derivative evaluation, and the slot is then advanced by `rate * half_step`.
/// Slots update in index order, so later slots see already-advanced values of
/// earlier ones.
#[must_use]
pub fn step_second_order(
    derivative: &DerivativeVector,
    state: &StateVector,
    half_step: f64,
    c: &CoefficientSet,
    controls: Controls,
    params: &ParameterSet,
    heading_error: f64,
) -> StateVector {
    use Slot::{
        AileronFilter, Bank, BankCommand, BankRate, GyroHeading, Heading, HeadingRate,
        LateralDeviation, RudderFilter, Sideslip,
    };

    let h = half_step;
    let k = h / 2.0;
    let d = derivative;
    let Controls {
        aileron: de,
        rudder: dn,
    } = controls;
    let mut s = *state;

    s[Heading] += (s[HeadingRate] + k * d[Heading]) * h;
    s[HeadingRate] += (-c.a(1) * (d[Heading] + k)
        - c.b(6) * (d[Bank] + k)
        - c.a(2) * (s[Sideslip] + k * d[Sideslip])
        - c.a(3) * dn
        - c.b(5) * de)
        * h;
    s[Bank] += (s[BankRate] + k * d[Bank]) * h;
    s[BankRate] += (-c.b(1) * (d[Bank] + k)
        - c.a(6) * (d[Heading] + k)
        - c.b(2) * (s[Sideslip] + k * d[Sideslip])
        - c.a(5) * dn
        - c.b(3) * de)
        * h;
    s[Sideslip] += ((d[Heading] + k) + c.b(4) * (s[Bank] + k * d[Bank]) + c.b(7) * (d[Bank] + k)
        - c.a(4) * (s[Sideslip] + k * d[Sideslip])
        - c.a(7) * dn)
        * h;
    s[LateralDeviation] +=
        (-c.c6() * ((s[Heading] + k * d[Heading]) - (s[Sideslip] + k * d[Sideslip]))) * h;
    s[GyroHeading] += ((-(s[Heading] + k * d[Heading]) / params.heading_lag)
        - ((s[GyroHeading] + k * d[GyroHeading]) / params.heading_lag))
        * h;
    s[BankCommand] += (((-heading_error * params.bank_to_heading_gain)
        / params.bank_to_heading_lag)
        - ((s[BankCommand] + k * d[BankCommand]) / params.bank_to_heading_lag))
        * h;
    s[AileronFilter] += (params.roll_rate_gain * (s[BankRate] + k * d[BankRate])
        - (s[AileronFilter] + k * d[AileronFilter]) / params.roll_rate_lag)
        * h;
    s[RudderFilter] += (params.yaw_rate_gain * (s[HeadingRate] + k * d[HeadingRate])
        - (s[RudderFilter] + k * d[RudderFilter]) / params.yaw_rate_lag)
        * h;

    s
}
