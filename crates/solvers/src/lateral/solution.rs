use std::fmt;

use super::RunOptions;

/// Indicates how the run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Stepped until `t` reached `t_end`.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The outputs recorded for one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Time at the start of the step.
    pub time: f64,

    /// Bank angle after integration.
    pub bank: f64,

    /// Bank rate evaluated before integration.
    pub bank_rate: f64,

    /// Heading after integration.
    pub heading: f64,

    /// Heading rate evaluated before integration.
    pub heading_rate: f64,

    /// Sideslip after integration.
    pub sideslip: f64,

    /// Aileron command applied during the step.
    pub aileron: f64,

    /// Rudder command applied during the step.
    pub rudder: f64,
}

/// One recorded output channel of a [`SimulationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Time,
    Bank,
    BankRate,
    Heading,
    HeadingRate,
    Sideslip,
    Aileron,
    Rudder,
}

impl Series {
    /// The plotted channels, in display order. Excludes [`Series::Time`].
    pub const PLOTTED: [Series; 7] = [
        Series::Bank,
        Series::BankRate,
        Series::Heading,
        Series::HeadingRate,
        Series::Sideslip,
        Series::Aileron,
        Series::Rudder,
    ];

    /// Short column name used in exported tables.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Series::Time => "t",
            Series::Bank => "gamma",
            Series::BankRate => "gamma_dot",
            Series::Heading => "psi",
            Series::HeadingRate => "psi_dot",
            Series::Sideslip => "beta",
            Series::Aileron => "de",
            Series::Rudder => "dn",
        }
    }

    /// Returns this channel's value from a sample.
    #[must_use]
    pub fn of(self, sample: &Sample) -> f64 {
        match self {
            Series::Time => sample.time,
            Series::Bank => sample.bank,
            Series::BankRate => sample.bank_rate,
            Series::Heading => sample.heading,
            Series::HeadingRate => sample.heading_rate,
            Series::Sideslip => sample.sideslip,
            Series::Aileron => sample.aileron,
            Series::Rudder => sample.rudder,
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Series::Time => "time",
            Series::Bank => "γ (bank)",
            Series::BankRate => "γ' (ω_x)",
            Series::Heading => "ψ (heading)",
            Series::HeadingRate => "ψ' (ω_y)",
            Series::Sideslip => "β (sideslip)",
            Series::Aileron => "δe (aileron)",
            Series::Rudder => "δn (rudder)",
        })
    }
}

/// Parallel output sequences of one run.
///
/// Every sequence has one entry per recorded step, so all eight always have
/// the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationResult {
    time: Vec<f64>,
    bank: Vec<f64>,
    bank_rate: Vec<f64>,
    heading: Vec<f64>,
    heading_rate: Vec<f64>,
    sideslip: Vec<f64>,
    aileron: Vec<f64>,
    rudder: Vec<f64>,
    trim_angle_of_attack: f64,
}

impl SimulationResult {
    pub(super) fn with_capacity(capacity: usize, trim_angle_of_attack: f64) -> Self {
        Self {
            time: Vec::with_capacity(capacity),
            bank: Vec::with_capacity(capacity),
            bank_rate: Vec::with_capacity(capacity),
            heading: Vec::with_capacity(capacity),
            heading_rate: Vec::with_capacity(capacity),
            sideslip: Vec::with_capacity(capacity),
            aileron: Vec::with_capacity(capacity),
            rudder: Vec::with_capacity(capacity),
            trim_angle_of_attack,
        }
    }

    pub(super) fn push(&mut self, sample: &Sample) {
        self.time.push(sample.time);
        self.bank.push(sample.bank);
        self.bank_rate.push(sample.bank_rate);
        self.heading.push(sample.heading);
        self.heading_rate.push(sample.heading_rate);
        self.sideslip.push(sample.sideslip);
        self.aileron.push(sample.aileron);
        self.rudder.push(sample.rudder);
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Trim angle of attack of the run's flight condition, degrees.
    #[must_use]
    pub fn trim_angle_of_attack(&self) -> f64 {
        self.trim_angle_of_attack
    }

    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    #[must_use]
    pub fn bank(&self) -> &[f64] {
        &self.bank
    }

    #[must_use]
    pub fn bank_rate(&self) -> &[f64] {
        &self.bank_rate
    }

    #[must_use]
    pub fn heading(&self) -> &[f64] {
        &self.heading
    }

    #[must_use]
    pub fn heading_rate(&self) -> &[f64] {
        &self.heading_rate
    }

    #[must_use]
    pub fn sideslip(&self) -> &[f64] {
        &self.sideslip
    }

    #[must_use]
    pub fn aileron(&self) -> &[f64] {
        &self.aileron
    }

    #[must_use]
    pub fn rudder(&self) -> &[f64] {
        &self.rudder
    }

    /// Returns one channel by name.
    #[must_use]
    pub fn series(&self, series: Series) -> &[f64] {
        match series {
            Series::Time => &self.time,
            Series::Bank => &self.bank,
            Series::BankRate => &self.bank_rate,
            Series::Heading => &self.heading,
            Series::HeadingRate => &self.heading_rate,
            Series::Sideslip => &self.sideslip,
            Series::Aileron => &self.aileron,
            Series::Rudder => &self.rudder,
        }
    }

    /// Returns the recorded step at `index`, if any.
    #[must_use]
    pub fn sample(&self, index: usize) -> Option<Sample> {
        (index < self.len()).then(|| Sample {
            time: self.time[index],
            bank: self.bank[index],
            bank_rate: self.bank_rate[index],
            heading: self.heading[index],
            heading_rate: self.heading_rate[index],
            sideslip: self.sideslip[index],
            aileron: self.aileron[index],
            rudder: self.rudder[index],
        })
    }

    /// Iterates over the recorded steps in time order.
    pub fn rows(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(|i| self.sample(i))
    }
}

/// The result of a lateral simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Recorded outputs.
    pub result: SimulationResult,
}

impl Solution {
    /// Number of recorded steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.result.len()
    }

    /// Renders a one-line status summary of the run.
    #[must_use]
    pub fn summary(&self, options: &RunOptions) -> String {
        let head = match self.status {
            Status::Complete => "Simulation complete.".to_owned(),
            Status::StoppedByObserver => format!("Simulation stopped after {} steps.", self.steps()),
        };
        format!(
            "{head} Mode: {}. Damper: {}. Method: {}. alpha_balance = {:.4}",
            options.mode,
            options.damper,
            options.scheme,
            self.result.trim_angle_of_attack()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lateral::{Damper, Mode, Scheme};

    fn sample(time: f64) -> Sample {
        Sample {
            time,
            bank: time * 2.0,
            rudder: -time,
            ..Sample::default()
        }
    }

    #[test]
    fn push_keeps_sequences_parallel() {
        let mut result = SimulationResult::with_capacity(4, 8.9);
        for i in 0..3 {
            result.push(&sample(f64::from(i)));
        }

        assert_eq!(result.len(), 3);
        for series in Series::PLOTTED {
            assert_eq!(result.series(series).len(), 3, "{series:?}");
        }
        assert_eq!(result.bank(), [0.0, 2.0, 4.0]);
        assert_eq!(result.rudder(), [-0.0, -1.0, -2.0]);
    }

    #[test]
    fn rows_round_trip_pushed_samples() {
        let mut result = SimulationResult::with_capacity(2, 0.0);
        result.push(&sample(0.5));
        result.push(&sample(1.5));

        let rows: Vec<Sample> = result.rows().collect();
        assert_eq!(rows, [sample(0.5), sample(1.5)]);
        assert_eq!(result.sample(2), None);
    }

    #[test]
    fn series_reads_the_matching_sample_field() {
        let s = Sample {
            time: 1.0,
            bank: 2.0,
            bank_rate: 3.0,
            heading: 4.0,
            heading_rate: 5.0,
            sideslip: 6.0,
            aileron: 7.0,
            rudder: 8.0,
        };
        let values: Vec<f64> = Series::PLOTTED.iter().map(|series| series.of(&s)).collect();
        assert_eq!(values, [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(Series::Time.of(&s), 1.0);
    }

    #[test]
    fn summary_names_mode_damper_method_and_trim() {
        let solution = Solution {
            status: Status::Complete,
            result: SimulationResult::with_capacity(0, 8.918_412_294),
        };
        let options = RunOptions::default()
            .with_mode(Mode::Manual)
            .with_damper(Damper::Failed)
            .with_scheme(Scheme::SecondOrder);

        assert_eq!(
            solution.summary(&options),
            "Simulation complete. Mode: manual. Damper: failed. \
             Method: second-order predictor. alpha_balance = 8.9184"
        );
    }

    #[test]
    fn summary_reports_early_stop() {
        let mut result = SimulationResult::with_capacity(1, 1.0);
        result.push(&sample(0.0));
        let solution = Solution {
            status: Status::StoppedByObserver,
            result,
        };

        assert!(
            solution
                .summary(&RunOptions::default())
                .starts_with("Simulation stopped after 1 steps. Mode: automatic.")
        );
    }
}
