use std::{sync::mpsc, thread};

use anyhow::{Context, Result, anyhow};
use gyrocourse_core::{CoefficientSet, Observer, ParameterSet};
use gyrocourse_observers::Cancellation;
use gyrocourse_solvers::lateral::{self, Action, Event, RunOptions, Sample, Solution};

/// Samples buffered between the worker and the consuming thread.
const CHANNEL_CAPACITY: usize = 1024;

/// Runs a simulation on a worker thread and hands each sample to `sink` on
/// the calling thread as it is produced.
///
/// If `sink` fails, the run is cancelled at the next step and the sink's
/// error is returned.
///
/// # Errors
///
/// Returns an error if the inputs are rejected, the worker panics, or `sink`
/// fails.
pub fn simulate<F>(
    coefficients: &CoefficientSet,
    params: &ParameterSet,
    options: &RunOptions,
    mut sink: F,
) -> Result<Solution>
where
    F: FnMut(&Sample) -> Result<()>,
{
    let cancel = Cancellation::new();
    let (tx, rx) = mpsc::sync_channel::<Sample>(CHANNEL_CAPACITY);

    thread::scope(|scope| -> Result<Solution> {
        let mut flag = cancel.clone();
        let worker = scope.spawn(move || {
            lateral::run_with(
                coefficients,
                params,
                options,
                move |event: &Event| -> Option<Action> {
                    if tx.send(event.sample).is_err() {
                        return Some(Action::StopEarly);
                    }
                    flag.observe(event)
                },
            )
        });

        let mut failure = None;
        for sample in rx {
            if failure.is_some() {
                continue;
            }
            if let Err(err) = sink(&sample) {
                cancel.cancel();
                failure = Some(err);
            }
        }

        let solution = worker
            .join()
            .map_err(|_| anyhow!("simulation worker panicked"))?
            .context("simulation rejected its inputs")?;

        match failure {
            Some(err) => Err(err),
            None => Ok(solution),
        }
    })
}
