use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gyrocourse_solvers::lateral::{Damper, Mode, Scheme};

/// Command-line arguments.
///
/// Every run setting is optional here; unset flags fall back to the config
/// file and then to the library defaults.
#[derive(Parser, Debug)]
#[command(name = "gyrocourse")]
#[command(about = "Lateral course-hold simulator for a gyro-compass autopilot")]
#[command(version)]
pub struct Args {
    /// TOML file with `[aircraft]` and `[run]` tables
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Simulated duration, s
    #[arg(long)]
    pub t_end: Option<f64>,

    /// Integration step, s
    #[arg(long)]
    pub dt: Option<f64>,

    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Manual aileron deflection, deg
    #[arg(long, allow_negative_numbers = true)]
    pub aileron: Option<f64>,

    /// Manual rudder deflection, deg
    #[arg(long, allow_negative_numbers = true)]
    pub rudder: Option<f64>,

    /// How long manual deflections are held, s
    #[arg(long)]
    pub deviation_time: Option<f64>,

    #[arg(long, value_enum)]
    pub damper: Option<DamperArg>,

    #[arg(long, value_enum)]
    pub scheme: Option<SchemeArg>,

    /// Bank-to-heading gain of the commanded-bank filter
    #[arg(long, allow_negative_numbers = true)]
    pub k_gamma_psi: Option<f64>,

    /// CSV output path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Open a plot window after the run (requires the `plot` feature)
    #[arg(long)]
    pub plot: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Automatic,
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DamperArg {
    Enabled,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    FirstOrder,
    SecondOrder,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Automatic => Mode::Automatic,
            ModeArg::Manual => Mode::Manual,
        }
    }
}

impl From<DamperArg> for Damper {
    fn from(arg: DamperArg) -> Self {
        match arg {
            DamperArg::Enabled => Damper::Enabled,
            DamperArg::Failed => Damper::Failed,
        }
    }
}

impl From<SchemeArg> for Scheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::FirstOrder => Scheme::FirstOrder,
            SchemeArg::SecondOrder => Scheme::SecondOrder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_leaves_everything_unset() {
        let args = Args::try_parse_from(["gyrocourse"]).expect("should parse");

        assert!(args.config.is_none());
        assert!(args.t_end.is_none());
        assert!(args.mode.is_none());
        assert!(!args.plot);
    }

    #[test]
    fn parses_run_flags() {
        let args = Args::try_parse_from([
            "gyrocourse",
            "--t-end",
            "20",
            "--dt",
            "0.005",
            "--mode",
            "manual",
            "--aileron",
            "-5",
            "--rudder",
            "2.5",
            "--deviation-time",
            "0.5",
            "--damper",
            "failed",
            "--scheme",
            "second-order",
            "--k-gamma-psi",
            "3",
            "-o",
            "out.csv",
        ])
        .expect("should parse");

        assert_eq!(args.t_end, Some(20.0));
        assert_eq!(args.dt, Some(0.005));
        assert_eq!(args.mode.map(Mode::from), Some(Mode::Manual));
        assert_eq!(args.aileron, Some(-5.0));
        assert_eq!(args.rudder, Some(2.5));
        assert_eq!(args.deviation_time, Some(0.5));
        assert_eq!(args.damper.map(Damper::from), Some(Damper::Failed));
        assert_eq!(args.scheme.map(Scheme::from), Some(Scheme::SecondOrder));
        assert_eq!(args.k_gamma_psi, Some(3.0));
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Args::try_parse_from(["gyrocourse", "--mode", "autopilot"]).is_err());
    }

    #[test]
    fn rejects_non_numeric_step() {
        assert!(Args::try_parse_from(["gyrocourse", "--dt", "fast"]).is_err());
    }
}
