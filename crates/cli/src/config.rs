use std::{fs, path::Path};

use anyhow::{Context, Result};
use gyrocourse_core::ParameterSet;
use gyrocourse_solvers::lateral::RunOptions;
use serde::Deserialize;

use crate::args::Args;

/// Contents of a TOML run file.
///
/// Both tables are optional and every field inside them falls back to its
/// default, so a file only needs the values it changes:
///
/// ```toml
/// [aircraft]
/// airspeed = 110.0
/// bank_to_heading_gain = 2.5
///
/// [run]
/// t_end = 60.0
/// damper = "failed"
///
/// [run.manual]
/// aileron = 5.0
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub aircraft: ParameterSet,
    pub run: RunOptions,
}

impl FileConfig {
    /// Reads and parses a run file.
    ///
    /// # Errors
    ///
    /// Returns an error naming the file if it cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Applies command-line overrides on top of the file values.
    #[must_use]
    pub fn with_overrides(mut self, args: &Args) -> Self {
        let run = &mut self.run;
        if let Some(t_end) = args.t_end {
            run.t_end = t_end;
        }
        if let Some(dt) = args.dt {
            run.dt = dt;
        }
        if let Some(mode) = args.mode {
            run.mode = mode.into();
        }
        if let Some(aileron) = args.aileron {
            run.manual.aileron = aileron;
        }
        if let Some(rudder) = args.rudder {
            run.manual.rudder = rudder;
        }
        if let Some(duration) = args.deviation_time {
            run.manual.duration = duration;
        }
        if let Some(damper) = args.damper {
            run.damper = damper.into();
        }
        if let Some(scheme) = args.scheme {
            run.scheme = scheme.into();
        }
        if let Some(gain) = args.k_gamma_psi {
            self.aircraft = self.aircraft.with_bank_to_heading_gain(gain);
        }
        self
    }
}

/// Resolves the parameters and options for a run from the file and flags.
///
/// # Errors
///
/// Returns an error if the config file named by `--config` cannot be loaded.
pub fn resolve(args: &Args) -> Result<FileConfig> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    Ok(file.with_overrides(args))
}
