//! Plotting observer for visualizing a run as it steps.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use gyrocourse_core::Observer;
use gyrocourse_solvers::lateral::{self, Series};

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Course hold").legend().x_label("t, s"))?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    x_label: Option<String>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, no axis label.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            x_label: None,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Labels the x-axis.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from an engine event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event.
///
/// Lateral engine events implement `Plottable<7>`, one trace per entry of
/// [`Series::PLOTTED`] against time.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<7> for lateral::Event {
    fn x(&self) -> Option<f64> {
        Some(self.sample.time)
    }

    fn traces(&self) -> [Option<f64>; 7] {
        Series::PLOTTED.map(|series| Some(series.of(&self.sample)))
    }
}

/// An observer that collects traces during a run and displays them via egui.
///
/// The const generic `N` is the number of traces. Record data by either:
///
/// - **Direct path**: pass `&mut PlotObserver` as the observer of an engine
///   whose events implement [`Plottable<N>`][Plottable].
/// - **Closure path**: wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record] with whatever traces the closure derives.
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::lateral();
/// lateral::run(&ParameterSet::default(), &RunOptions::default(), &mut obs)?;
/// obs.show(ShowConfig::new().title("Course hold").legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    x_label: config.x_label,
                }))
            }),
        )
    }
}

impl PlotObserver<7> {
    /// Creates an observer with one trace per lateral output channel.
    #[must_use]
    pub fn lateral() -> Self {
        Self {
            names: Series::PLOTTED.map(|series| series.to_string()),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to engines that take an observer
/// by value, so [`PlotObserver::show`] can be called after the run completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    x_label: Option<String>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.clone());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use gyrocourse_core::{ParameterSet, StateVector};
    use gyrocourse_solvers::lateral::{Action, Event, RunOptions, Sample};

    use super::*;

    fn points<const N: usize>(obs: &PlotObserver<N>, trace: usize) -> &[[f64; 2]] {
        &obs.data[trace]
    }

    #[test]
    fn lateral_observer_names_every_plotted_channel() {
        let obs = PlotObserver::lateral();

        assert_eq!(obs.names[0], "γ (bank)");
        assert_eq!(obs.names[6], "δn (rudder)");
    }

    #[test]
    fn lateral_event_traces_follow_plotted_order() {
        let event = Event {
            step: 0,
            sample: Sample {
                time: 0.5,
                bank: 1.0,
                bank_rate: 2.0,
                heading: 3.0,
                heading_rate: 4.0,
                sideslip: 5.0,
                aileron: 6.0,
                rudder: 7.0,
            },
            state: StateVector::default(),
        };
        let mut obs = PlotObserver::lateral();

        let action: Option<Action> = obs.observe(&event);

        assert!(action.is_none());
        for trace in 0..7 {
            assert_eq!(points(&obs, trace), [[0.5, (trace + 1) as f64]]);
        }
    }

    #[test]
    fn collects_every_step_of_a_run() {
        let mut obs = PlotObserver::lateral();
        let solution = lateral::run(
            &ParameterSet::default(),
            &RunOptions::new(1.0, 0.01),
            &mut obs,
        )
        .expect("run should succeed");

        let heading = points(&obs, 2);
        assert_eq!(heading.len(), solution.steps());
        assert_eq!(heading[10], [solution.result.time()[10], solution.result.heading()[10]]);
    }

    #[test]
    fn record_skips_missing_trace_values() {
        let mut obs: PlotObserver<2> = PlotObserver::new(["a", "b"]);
        obs.record(1.0, [Some(10.0), None]);
        obs.record(2.0, [None, Some(20.0)]);

        assert_eq!(points(&obs, 0), [[1.0, 10.0]]);
        assert_eq!(points(&obs, 1), [[2.0, 20.0]]);
    }
}
