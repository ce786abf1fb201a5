use thiserror::Error;

/// Physical, aerodynamic, and control-law constants for one aircraft and
/// flight condition.
///
/// Units follow the engineering system the moment derivatives are quoted in:
/// weight in kilogram-force, inertias in kgf·m·s², density in kgf·s²/m⁴.
/// [`ParameterSet::default`] is a medium transport aircraft on approach at
/// 500 m.
///
/// A set is plain data. The engine reads it by reference and never mutates it,
/// so one set may be shared across any number of runs. Call
/// [`validate`](Self::validate) before deriving coefficients from a set built
/// by hand or loaded from a file.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ParameterSet {
    // Geometry
    /// Wing area `S`, m².
    pub wing_area: f64,
    /// Wing span `l`, m.
    pub wing_span: f64,
    /// Mean aerodynamic chord `b_a`, m.
    pub mean_chord: f64,
    /// Relative centre-of-gravity position `x̄_t`.
    pub cg_position: f64,

    // Mass and inertia
    /// Weight `G`, kgf.
    pub weight: f64,
    /// Roll inertia `I_x`, kgf·m·s².
    pub inertia_x: f64,
    /// Yaw inertia `I_y`, kgf·m·s².
    pub inertia_y: f64,
    /// Pitch inertia `I_z`, kgf·m·s².
    pub inertia_z: f64,

    // Flight condition
    /// True airspeed `V₀`, m/s.
    pub airspeed: f64,
    /// Altitude `H₀`, m.
    pub altitude: f64,
    /// Air density `ρ`, kgf·s²/m⁴.
    pub air_density: f64,
    /// Speed of sound at altitude `a_H`, m/s.
    pub speed_of_sound: f64,
    /// Gravitational acceleration `g`, m/s².
    pub gravity: f64,

    // Side force and lift
    /// Side-force derivative with respect to sideslip, `C_z^β`.
    pub side_force_sideslip: f64,
    /// Side-force derivative with respect to rudder, `C_z^δn`.
    pub side_force_rudder: f64,
    /// Lift-curve slope `C_y^α`.
    pub lift_curve_slope: f64,
    /// Zero-lift coefficient `C_y0`.
    pub zero_lift: f64,

    // Yawing moment
    /// `m_y^ωy`, yaw damping.
    pub yaw_yaw_rate: f64,
    /// `m_y^β`, directional stability.
    pub yaw_sideslip: f64,
    /// `m_y^δn`, rudder effectiveness.
    pub yaw_rudder: f64,
    /// `m_y^δe`, adverse yaw from aileron.
    pub yaw_aileron: f64,
    /// `m_y^ωx`, yaw due to roll rate.
    pub yaw_roll_rate: f64,

    // Rolling moment
    /// `m_x^δn`, roll due to rudder.
    pub roll_rudder: f64,
    /// `m_x^ωy`, roll due to yaw rate.
    pub roll_yaw_rate: f64,
    /// `m_x^ωx`, roll damping.
    pub roll_roll_rate: f64,
    /// `m_x^β`, dihedral effect.
    pub roll_sideslip: f64,
    /// `m_x^δe`, aileron effectiveness.
    pub roll_aileron: f64,

    // Thrust
    /// Thrust derivative with respect to throttle, `P^δg`.
    pub thrust_throttle: f64,
    /// Thrust derivative with respect to airspeed, `P^V`.
    pub thrust_speed: f64,

    // Rate loops
    /// Roll-rate loop gain `k_ωx`.
    pub roll_rate_gain: f64,
    /// Yaw-rate loop gain `k_ωy`.
    pub yaw_rate_gain: f64,
    /// Roll-rate loop time constant `T_ωx`, s.
    pub roll_rate_lag: f64,
    /// Yaw-rate loop time constant `T_ωy`, s.
    pub yaw_rate_lag: f64,
    /// Bank gain `k_γ`.
    pub bank_gain: f64,

    // Course loop
    /// Bank-to-heading gain `k_γψ`. The one field hosts override per run.
    pub bank_to_heading_gain: f64,
    /// Bank-to-heading time constant `T_γψ`, s.
    pub bank_to_heading_lag: f64,
    /// Heading-hold gain `k_ψ`.
    pub heading_gain: f64,
    /// Heading filter time constant `T_ψ`, s.
    pub heading_lag: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            wing_area: 201.45,
            wing_span: 37.55,
            mean_chord: 5.285,
            cg_position: 0.24,

            weight: 73_000.0,
            inertia_x: 170_000.0,
            inertia_y: 800_000.0,
            inertia_z: 660_000.0,

            airspeed: 97.2,
            altitude: 500.0,
            air_density: 0.1190,
            speed_of_sound: 338.36,
            gravity: 9.81,

            side_force_sideslip: -0.8136,
            side_force_rudder: -0.16,
            lift_curve_slope: 5.78,
            zero_lift: -0.255,

            yaw_yaw_rate: -0.141,
            yaw_sideslip: -0.1518,
            yaw_rudder: -0.0710,
            yaw_aileron: 0.0,
            yaw_roll_rate: 0.026,

            roll_rudder: -0.02,
            roll_yaw_rate: -0.151,
            roll_roll_rate: -0.56,
            roll_sideslip: -0.1146,
            roll_aileron: -0.07,

            thrust_throttle: 7003.0,
            thrust_speed: -13.8,

            roll_rate_gain: 1.5,
            yaw_rate_gain: 2.5,
            roll_rate_lag: 1.6,
            yaw_rate_lag: 2.5,
            bank_gain: 2.0,

            bank_to_heading_gain: 2.0,
            bank_to_heading_lag: 0.1,
            heading_gain: 1.0,
            heading_lag: 0.1,
        }
    }
}

/// Errors reported by [`ParameterSet::validate`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("lift_curve_slope must be non-zero")]
    ZeroLiftSlope,
}

impl ParameterSet {
    /// Returns a copy with the bank-to-heading gain `k_γψ` replaced.
    #[must_use]
    pub fn with_bank_to_heading_gain(self, gain: f64) -> Self {
        Self {
            bank_to_heading_gain: gain,
            ..self
        }
    }

    /// Returns the aircraft mass `G / g`.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.weight / self.gravity
    }

    /// Returns the dynamic pressure `ρV²/2`.
    #[must_use]
    pub fn dynamic_pressure(&self) -> f64 {
        self.air_density * self.airspeed * self.airspeed / 2.0
    }

    /// Checks the invariants coefficient derivation and the control law rely on.
    ///
    /// Every field must be finite. Fields used as divisors must be positive,
    /// and the lift-curve slope must be non-zero.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ParameterError`].
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { field, value });
            }
        }

        let divisors = [
            ("wing_area", self.wing_area),
            ("weight", self.weight),
            ("inertia_x", self.inertia_x),
            ("inertia_y", self.inertia_y),
            ("airspeed", self.airspeed),
            ("air_density", self.air_density),
            ("gravity", self.gravity),
            ("roll_rate_lag", self.roll_rate_lag),
            ("yaw_rate_lag", self.yaw_rate_lag),
            ("bank_to_heading_lag", self.bank_to_heading_lag),
            ("heading_lag", self.heading_lag),
        ];
        for (field, value) in divisors {
            if value <= 0.0 {
                return Err(ParameterError::NonPositive { field, value });
            }
        }

        if self.lift_curve_slope == 0.0 {
            return Err(ParameterError::ZeroLiftSlope);
        }

        Ok(())
    }

    fn fields(&self) -> [(&'static str, f64); 38] {
        [
            ("wing_area", self.wing_area),
            ("wing_span", self.wing_span),
            ("mean_chord", self.mean_chord),
            ("cg_position", self.cg_position),
            ("weight", self.weight),
            ("inertia_x", self.inertia_x),
            ("inertia_y", self.inertia_y),
            ("inertia_z", self.inertia_z),
            ("airspeed", self.airspeed),
            ("altitude", self.altitude),
            ("air_density", self.air_density),
            ("speed_of_sound", self.speed_of_sound),
            ("gravity", self.gravity),
            ("side_force_sideslip", self.side_force_sideslip),
            ("side_force_rudder", self.side_force_rudder),
            ("lift_curve_slope", self.lift_curve_slope),
            ("zero_lift", self.zero_lift),
            ("yaw_yaw_rate", self.yaw_yaw_rate),
            ("yaw_sideslip", self.yaw_sideslip),
            ("yaw_rudder", self.yaw_rudder),
            ("yaw_aileron", self.yaw_aileron),
            ("yaw_roll_rate", self.yaw_roll_rate),
            ("roll_rudder", self.roll_rudder),
            ("roll_yaw_rate", self.roll_yaw_rate),
            ("roll_roll_rate", self.roll_roll_rate),
            ("roll_sideslip", self.roll_sideslip),
            ("roll_aileron", self.roll_aileron),
            ("thrust_throttle", self.thrust_throttle),
            ("thrust_speed", self.thrust_speed),
            ("roll_rate_gain", self.roll_rate_gain),
            ("yaw_rate_gain", self.yaw_rate_gain),
            ("roll_rate_lag", self.roll_rate_lag),
            ("yaw_rate_lag", self.yaw_rate_lag),
            ("bank_gain", self.bank_gain),
            ("bank_to_heading_gain", self.bank_to_heading_gain),
            ("bank_to_heading_lag", self.bank_to_heading_lag),
            ("heading_gain", self.heading_gain),
            ("heading_lag", self.heading_lag),
        ]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ParameterSet::default().validate(), Ok(()));
    }

    #[test]
    fn mass_divides_weight_by_gravity() {
        let params = ParameterSet::default();
        assert_relative_eq!(params.mass(), 73_000.0 / 9.81);
    }

    #[test]
    fn dynamic_pressure_uses_density_and_airspeed() {
        let params = ParameterSet {
            air_density: 0.5,
            airspeed: 100.0,
            ..ParameterSet::default()
        };
        assert_relative_eq!(params.dynamic_pressure(), 2_500.0);
    }

    #[test]
    fn gain_override_touches_only_that_field() {
        let base = ParameterSet::default();
        let tuned = base.with_bank_to_heading_gain(3.5);

        assert_relative_eq!(tuned.bank_to_heading_gain, 3.5);
        assert_eq!(
            ParameterSet {
                bank_to_heading_gain: base.bank_to_heading_gain,
                ..tuned
            },
            base
        );
    }

    #[test]
    fn rejects_non_positive_airspeed() {
        let params = ParameterSet {
            airspeed: 0.0,
            ..ParameterSet::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::NonPositive {
                field: "airspeed",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_negative_density_and_zero_lag() {
        let params = ParameterSet {
            air_density: -0.1,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::NonPositive {
                field: "air_density",
                ..
            })
        ));

        let params = ParameterSet {
            heading_lag: 0.0,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::NonPositive {
                field: "heading_lag",
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_finite_fields_before_sign_checks() {
        let params = ParameterSet {
            wing_area: f64::INFINITY,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::NonFinite {
                field: "wing_area",
                ..
            })
        ));
    }

    #[test]
    fn rejects_flat_lift_curve() {
        let params = ParameterSet {
            lift_curve_slope: 0.0,
            ..ParameterSet::default()
        };
        assert_eq!(params.validate(), Err(ParameterError::ZeroLiftSlope));
    }
}
