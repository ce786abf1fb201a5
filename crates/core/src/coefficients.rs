//! Stability and control coefficients derived from a [`ParameterSet`].
//!
//! Each `A`/`B` entry scales one moment or force derivative by density,
//! airspeed, geometry, and an inertia (or mass), so the equations of motion
//! read as plain linear couplings:
//!
//! | Slot | Formula                                 |
//! |------|-----------------------------------------|
//! | A1   | −(m_y^ωy ρ V) / (4 I_y) · S l²          |
//! | A2   | −(m_y^β ρ V²) / (2 I_y) · S l           |
//! | A3   | −(m_y^δn ρ V²) / (2 I_y) · S l          |
//! | A4   | −(C_z^β ρ V) / (2 m) · S                |
//! | A5   | −(m_x^δn ρ V²) / (2 I_x) · S l          |
//! | A6   | −(m_x^ωy ρ V) / (4 I_x) · S l²          |
//! | A7   | −(C_z^δn ρ V) / (2 m) · S               |
//! | B1   | −(m_x^ωx ρ V) / (4 I_x) · S l²          |
//! | B2   | −(m_x^β ρ V²) / (2 I_x) · S l           |
//! | B3   | −(m_x^δe ρ V²) / (2 I_x) · S l          |
//! | B4   | (g / V) · cos α_trim                    |
//! | B5   | −(m_y^δe ρ V²) / (2 I_y) · S l          |
//! | B6   | −(m_y^ωx ρ V) / (4 I_y) · S l²          |
//! | B7   | sin α_trim                              |
//! | C6   | V / 57.3                                |

use crate::ParameterSet;

/// Degrees per radian as used throughout the model.
///
/// The rounded value is part of the model: trim angle of attack and the
/// lateral-deviation rate are defined with it.
pub const DEG_PER_RAD: f64 = 57.3;

/// Coefficients computed once per run and shared read-only by every step.
///
/// Slots are addressed one-based to match the formula table in the
/// [module docs](self): `a(1)` is A1, `b(7)` is B7.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSet {
    c6: f64,
    a: [f64; 7],
    b: [f64; 7],
    trim_angle_of_attack: f64,
}

impl CoefficientSet {
    /// Derives the coefficient set for a parameter set.
    ///
    /// The derivation is pure: identical parameters give bit-identical
    /// coefficients. It assumes the invariants checked by
    /// [`ParameterSet::validate`]; callers that skip validation may get
    /// non-finite coefficients.
    #[must_use]
    pub fn derive(params: &ParameterSet) -> Self {
        let m = params.mass();
        let rho = params.air_density;
        let v = params.airspeed;
        let v2 = v.powi(2);
        let s = params.wing_area;
        let l = params.wing_span;
        let ix = params.inertia_x;
        let iy = params.inertia_y;

        let alpha = trim_angle_of_attack(params);
        let alpha_rad = alpha / DEG_PER_RAD;

        let a = [
            -((params.yaw_yaw_rate * rho * v) / (4.0 * iy)) * (s * l.powi(2)),
            -((params.yaw_sideslip * rho * v2) / (2.0 * iy)) * (s * l),
            -((params.yaw_rudder * rho * v2) / (2.0 * iy)) * (s * l),
            -((params.side_force_sideslip * rho * v) / (2.0 * m)) * s,
            -((params.roll_rudder * rho * v2) / (2.0 * ix)) * (s * l),
            -((params.roll_yaw_rate * rho * v) / (4.0 * ix)) * (s * l.powi(2)),
            -((params.side_force_rudder * rho * v) / (2.0 * m)) * s,
        ];

        let b = [
            -((params.roll_roll_rate * rho * v) / (4.0 * ix)) * (s * l.powi(2)),
            -((params.roll_sideslip * rho * v2) / (2.0 * ix)) * (s * l),
            -((params.roll_aileron * rho * v2) / (2.0 * ix)) * (s * l),
            (params.gravity / v) * alpha_rad.cos(),
            -((params.yaw_aileron * rho * v2) / (2.0 * iy)) * (s * l),
            -((params.yaw_roll_rate * rho * v) / (4.0 * iy)) * (s * l.powi(2)),
            alpha_rad.sin(),
        ];

        Self {
            c6: v / DEG_PER_RAD,
            a,
            b,
            trim_angle_of_attack: alpha,
        }
    }

    /// Returns `A1`..`A7` by one-based slot number.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside `1..=7`.
    #[must_use]
    pub fn a(&self, slot: usize) -> f64 {
        assert!((1..=7).contains(&slot), "A slot {slot} out of range 1..=7");
        self.a[slot - 1]
    }

    /// Returns `B1`..`B7` by one-based slot number.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside `1..=7`.
    #[must_use]
    pub fn b(&self, slot: usize) -> f64 {
        assert!((1..=7).contains(&slot), "B slot {slot} out of range 1..=7");
        self.b[slot - 1]
    }

    /// Returns the populated trim-array slot `C6 = V / 57.3`.
    ///
    /// It scales the heading-minus-sideslip term of the lateral-deviation rate.
    #[must_use]
    pub fn c6(&self) -> f64 {
        self.c6
    }

    /// Returns `A1`..`A7` in slot order.
    #[must_use]
    pub fn a_slots(&self) -> &[f64; 7] {
        &self.a
    }

    /// Returns `B1`..`B7` in slot order.
    #[must_use]
    pub fn b_slots(&self) -> &[f64; 7] {
        &self.b
    }

    /// Returns the trim angle of attack in degrees.
    #[must_use]
    pub fn trim_angle_of_attack(&self) -> f64 {
        self.trim_angle_of_attack
    }
}

/// Returns the angle of attack, in degrees, at which lift equals weight.
///
/// Computed from the trim lift coefficient `2G / (S ρ V²)`.
#[must_use]
pub fn trim_angle_of_attack(params: &ParameterSet) -> f64 {
    let trim_lift = (2.0 * params.weight)
        / (params.wing_area * params.air_density * params.airspeed.powi(2));
    DEG_PER_RAD * ((trim_lift - params.zero_lift) / params.lift_curve_slope)
}
