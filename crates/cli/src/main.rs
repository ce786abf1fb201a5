//! gyrocourse - lateral course-hold simulator

mod args;
mod config;
mod export;
mod worker;

use std::{
    fs::File,
    io::{self, Write},
};

use anyhow::{Context, Result};
use clap::Parser;
use gyrocourse_core::CoefficientSet;
use gyrocourse_solvers::lateral::Solution;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{args::Args, config::FileConfig, export::CsvSink};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let solution = run(&args)?;

    if args.plot {
        show_plot(&solution)?;
    }

    Ok(())
}

/// Resolves the run settings, simulates on a worker thread, and streams the
/// CSV to `--output` or stdout.
fn run(args: &Args) -> Result<Solution> {
    let FileConfig {
        aircraft: params,
        run: options,
    } = config::resolve(args)?;

    options.validate().context("invalid run options")?;
    params.validate().context("invalid aircraft parameters")?;
    let coefficients = CoefficientSet::derive(&params);
    debug!(
        q = params.dynamic_pressure(),
        a = ?coefficients.a_slots(),
        b = ?coefficients.b_slots(),
        c6 = coefficients.c6(),
        "derived coefficients"
    );

    info!(
        t_end = options.t_end,
        dt = options.dt,
        mode = %options.mode,
        damper = %options.damper,
        scheme = %options.scheme,
        "starting run"
    );

    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = CsvSink::new(output).context("failed to write CSV header")?;

    let solution = worker::simulate(&coefficients, &params, &options, |sample| {
        sink.write(sample).context("failed to write CSV row")
    })?;
    let rows = sink.rows();
    sink.finish()?;

    info!("{}", solution.summary(&options));
    if let Some(path) = &args.output {
        info!("wrote {rows} rows to {}", path.display());
    }

    Ok(solution)
}

#[cfg(feature = "plot")]
fn show_plot(solution: &Solution) -> Result<()> {
    use gyrocourse_observers::{PlotObserver, ShowConfig};
    use gyrocourse_solvers::lateral::Series;

    let mut obs = PlotObserver::lateral();
    for row in solution.result.rows() {
        obs.record(row.time, Series::PLOTTED.map(|series| Some(series.of(&row))));
    }

    obs.show(
        ShowConfig::new()
            .title("gyrocourse")
            .legend()
            .x_label("t, s"),
    )
    .map_err(|err| anyhow::anyhow!("failed to open plot window: {err}"))
}

#[cfg(not(feature = "plot"))]
fn show_plot(_solution: &Solution) -> Result<()> {
    tracing::warn!("--plot ignored: built without the `plot` feature");
    Ok(())
}
