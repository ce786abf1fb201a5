//! Interactive visualizations of lateral course-hold runs.
//!
//! Each mode runs the engine with the default aircraft and opens an interactive
//! plot window showing the response.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- course
//! cargo run --example plot --features plot -- damper
//! cargo run --example plot --features plot -- schemes
//! cargo run --example plot --features plot -- schemes 0.05
//! ```
//!
//! # Modes
//!
//! - **course**: the 10° course change under the automatic control law, every
//!   output channel against time.
//!
//! - **damper**: heading rate with the yaw damper enabled and failed. The
//!   failed run swings further before the gyro-compass loop settles it.
//!
//! - **schemes [dt]**: bank angle from the first-order and second-order schemes
//!   over the same time grid. Try `0.01` (default) and `0.05`.

use std::error::Error;

use gyrocourse_core::ParameterSet;
use gyrocourse_observers::{PlotObserver, ShowConfig};
use gyrocourse_solvers::lateral::{self, Damper, Event, RunOptions, Scheme};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "course".into());
    match mode.as_str() {
        "course" => course(),
        "damper" => damper(),
        "schemes" => {
            let dt = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid step size, expected a number such as 0.05");
                    std::process::exit(1);
                })
                .unwrap_or(0.01);
            schemes(dt)
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [course|damper|schemes [dt]]");
            std::process::exit(1);
        }
    }
}

/// Plots every channel of the default automatic run.
fn course() -> Result<(), Box<dyn Error>> {
    let options = RunOptions::default();
    let mut obs = PlotObserver::lateral();

    let solution = lateral::run(&ParameterSet::default(), &options, &mut obs)?;

    obs.show(
        ShowConfig::new()
            .title(solution.summary(&options))
            .legend()
            .x_label("t, s"),
    )?;

    Ok(())
}

/// Overlays the heading rate with the damper enabled and failed.
fn damper() -> Result<(), Box<dyn Error>> {
    let params = ParameterSet::default();
    let mut obs = PlotObserver::<2>::new(["ψ' damper enabled", "ψ' damper failed"]);

    lateral::run(&params, &RunOptions::default(), |event: &Event| {
        obs.record(event.sample.time, [Some(event.sample.heading_rate), None]);
        None
    })?;
    lateral::run(
        &params,
        &RunOptions::default().with_damper(Damper::Failed),
        |event: &Event| {
            obs.record(event.sample.time, [None, Some(event.sample.heading_rate)]);
            None
        },
    )?;

    obs.show(
        ShowConfig::new()
            .title("Yaw damper: heading rate, enabled vs. failed")
            .legend()
            .x_label("t, s"),
    )?;

    Ok(())
}

/// Overlays the bank angle from both integration schemes.
fn schemes(dt: f64) -> Result<(), Box<dyn Error>> {
    let params = ParameterSet::default();
    let options = RunOptions::new(40.0, dt);
    let mut obs = PlotObserver::<2>::new(["γ first order", "γ second order"]);

    for (trace, scheme) in [Scheme::FirstOrder, Scheme::SecondOrder]
        .into_iter()
        .enumerate()
    {
        lateral::run(&params, &options.with_scheme(scheme), |event: &Event| {
            let mut traces = [None, None];
            traces[trace] = Some(event.sample.bank);
            obs.record(event.sample.time, traces);
            None
        })?;
    }

    obs.show(
        ShowConfig::new()
            .title(format!("Integration schemes: bank angle, dt = {dt}"))
            .legend()
            .x_label("t, s"),
    )?;

    Ok(())
}
