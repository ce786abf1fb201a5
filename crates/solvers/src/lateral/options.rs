use std::fmt;

use thiserror::Error;

use super::Error;

/// Which control law drives the surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Mode {
    /// Closed-loop course hold.
    #[default]
    Automatic,

    /// Open-loop deflections held for [`ManualInput::duration`], then released.
    Manual,
}

/// Health of the yaw damper in the rudder channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Damper {
    #[default]
    Enabled,

    /// The damper contributes nothing; automatic mode commands zero rudder.
    Failed,
}

/// Integration scheme used to advance the state each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Scheme {
    /// Explicit Euler with the run's `dt`.
    #[default]
    FirstOrder,

    /// Single-evaluation predictor with the fixed [`HALF_STEP`](super::HALF_STEP).
    SecondOrder,
}

/// Host codes: `1` automatic, `0` manual.
impl TryFrom<i32> for Mode {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Error> {
        match code {
            1 => Ok(Self::Automatic),
            0 => Ok(Self::Manual),
            other => Err(Error::UnknownMode(other)),
        }
    }
}

/// Host codes: `1` enabled, `0` failed.
impl TryFrom<i32> for Damper {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Error> {
        match code {
            1 => Ok(Self::Enabled),
            0 => Ok(Self::Failed),
            other => Err(Error::UnknownDamper(other)),
        }
    }
}

/// Host codes: `1` first order, `2` second order.
impl TryFrom<i32> for Scheme {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Error> {
        match code {
            1 => Ok(Self::FirstOrder),
            2 => Ok(Self::SecondOrder),
            other => Err(Error::UnknownScheme(other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Automatic => "automatic",
            Self::Manual => "manual",
        })
    }
}

impl fmt::Display for Damper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Enabled => "enabled",
            Self::Failed => "failed",
        })
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstOrder => "first-order (Euler)",
            Self::SecondOrder => "second-order predictor",
        })
    }
}

/// Open-loop deflections applied in [`Mode::Manual`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ManualInput {
    /// Aileron deflection held while `t < duration`.
    pub aileron: f64,

    /// Rudder deflection held while `t < duration`.
    pub rudder: f64,

    /// How long the deflections are held, s.
    pub duration: f64,
}

impl Default for ManualInput {
    fn default() -> Self {
        Self {
            aileron: 0.0,
            rudder: 0.0,
            duration: 1.0,
        }
    }
}

/// Errors that can occur when validating [`RunOptions`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("t_end must be finite and positive, got {0}")]
    Duration(f64),

    #[error("dt must be finite and positive, got {0}")]
    Step(f64),

    #[error("manual input values must be finite")]
    ManualInput,
}

/// Run-time options for one simulation run.
///
/// Defaults mirror a typical tuning session: 40 s at `dt = 0.01`, automatic
/// mode, damper enabled, first-order integration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct RunOptions {
    /// Simulated duration, s. Steps are taken while `t < t_end`.
    pub t_end: f64,

    /// Step size, s. Time advances by repeated addition of `dt`.
    pub dt: f64,

    pub mode: Mode,
    pub manual: ManualInput,
    pub damper: Damper,
    pub scheme: Scheme,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new(40.0, 0.01)
    }
}

impl RunOptions {
    /// Creates options for the given duration and step with all other
    /// settings at their defaults.
    ///
    /// Values are checked by [`validate`](Self::validate), which the engine
    /// calls before the first step.
    #[must_use]
    pub fn new(t_end: f64, dt: f64) -> Self {
        Self {
            t_end,
            dt,
            mode: Mode::default(),
            manual: ManualInput::default(),
            damper: Damper::default(),
            scheme: Scheme::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_manual(mut self, manual: ManualInput) -> Self {
        self.manual = manual;
        self
    }

    #[must_use]
    pub fn with_damper(mut self, damper: Damper) -> Self {
        self.damper = damper;
        self
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Checks that the options describe a runnable simulation.
    ///
    /// # Errors
    ///
    /// Returns an error if `t_end` or `dt` is non-positive or non-finite,
    /// or if any manual input value is non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.t_end.is_finite() || self.t_end <= 0.0 {
            return Err(ConfigError::Duration(self.t_end));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::Step(self.dt));
        }

        let ManualInput {
            aileron,
            rudder,
            duration,
        } = self.manual;
        if ![aileron, rudder, duration].iter().all(|v| v.is_finite()) {
            return Err(ConfigError::ManualInput);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = RunOptions::default();
        assert_eq!(options.validate(), Ok(()));
        assert_eq!(options.mode, Mode::Automatic);
        assert_eq!(options.damper, Damper::Enabled);
        assert_eq!(options.scheme, Scheme::FirstOrder);
    }

    #[test]
    fn rejects_non_positive_duration_and_step() {
        assert_eq!(
            RunOptions::new(0.0, 0.01).validate(),
            Err(ConfigError::Duration(0.0))
        );
        assert_eq!(
            RunOptions::new(-1.0, 0.01).validate(),
            Err(ConfigError::Duration(-1.0))
        );
        assert_eq!(
            RunOptions::new(1.0, 0.0).validate(),
            Err(ConfigError::Step(0.0))
        );
        assert_eq!(
            RunOptions::new(1.0, -0.5).validate(),
            Err(ConfigError::Step(-0.5))
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(RunOptions::new(f64::INFINITY, 0.01).validate().is_err());
        assert!(RunOptions::new(1.0, f64::NAN).validate().is_err());

        let options = RunOptions::default().with_manual(ManualInput {
            aileron: f64::NAN,
            ..ManualInput::default()
        });
        assert_eq!(options.validate(), Err(ConfigError::ManualInput));
    }

    #[test]
    fn host_codes_map_to_variants() {
        assert_eq!(Mode::try_from(1), Ok(Mode::Automatic));
        assert_eq!(Mode::try_from(0), Ok(Mode::Manual));
        assert_eq!(Damper::try_from(1), Ok(Damper::Enabled));
        assert_eq!(Damper::try_from(0), Ok(Damper::Failed));
        assert_eq!(Scheme::try_from(1), Ok(Scheme::FirstOrder));
        assert_eq!(Scheme::try_from(2), Ok(Scheme::SecondOrder));
    }

    #[test]
    fn unknown_host_codes_fail_loudly() {
        assert_eq!(Mode::try_from(2), Err(Error::UnknownMode(2)));
        assert_eq!(Damper::try_from(-1), Err(Error::UnknownDamper(-1)));
        assert_eq!(Scheme::try_from(0), Err(Error::UnknownScheme(0)));
    }
}
