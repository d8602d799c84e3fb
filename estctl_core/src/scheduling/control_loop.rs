use super::config::LoopConfig;
use super::observer::{ReportObserver, TickObserver, TickRecord};
use crate::core::{Controller, Estimator, LogSummary, Plant, State};
use crate::error::EstctlResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a [`ControlLoop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, no tick run yet
    Ready,
    /// At least one tick has run; `tick` is the next tick to execute
    Running { tick: u64 },
    /// All configured ticks have run
    Finished { ticks: u64 },
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopState::Ready => write!(f, "Ready"),
            LoopState::Running { tick } => write!(f, "Running (next tick {})", tick),
            LoopState::Finished { ticks } => write!(f, "Finished after {} ticks", ticks),
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Ticks executed over the lifetime of the loop
    pub ticks: u64,
    /// Simulated time covered (`ticks * dt`)
    pub sim_time: f64,
    pub final_measurement: State,
    pub final_estimate: State,
    /// Control input computed on the last tick
    pub final_control: f64,
    /// Largest |u| seen
    pub peak_abs_control: f64,
    /// Largest |position| seen in the measurements
    pub peak_abs_position: f64,
}

/// Discrete-time feedback loop driver
///
/// Runs `plant -> estimator -> controller` once per tick, feeding the
/// controller output of tick `k` into the plant on tick `k + 1`. The first
/// tick applies `u = 0`.
pub struct ControlLoop<P, E, C> {
    plant: P,
    estimator: E,
    controller: C,
    config: LoopConfig,
    state: LoopState,
    tick: u64,
    control: f64,
    last_measurement: State,
    last_estimate: State,
    peak_abs_control: f64,
    peak_abs_position: f64,
    observers: Vec<Box<dyn TickObserver>>,
    finish_reported: bool,
}

impl<P, E, C> ControlLoop<P, E, C>
where
    P: Plant,
    E: Estimator,
    C: Controller,
{
    /// Create a loop over the given components
    ///
    /// Fails if `config` does not validate; no tick can run in that case.
    /// When `config.report_every` is set a [`ReportObserver`] is installed.
    pub fn new(plant: P, estimator: E, controller: C, config: LoopConfig) -> EstctlResult<Self> {
        config.validate()?;

        let last_measurement = plant.state();
        let last_estimate = estimator.estimate();

        let mut observers: Vec<Box<dyn TickObserver>> = Vec::new();
        if let Some(every) = config.report_every {
            observers.push(Box::new(ReportObserver::new(every)));
        }

        log::debug!(
            "control loop ready: plant={} estimator={} controller={} dt={} ticks={}",
            plant.name(),
            estimator.name(),
            controller.name(),
            config.dt,
            config.tick_count
        );

        Ok(Self {
            plant,
            estimator,
            controller,
            config,
            state: LoopState::Ready,
            tick: 0,
            control: 0.0,
            last_measurement,
            last_estimate,
            peak_abs_control: 0.0,
            peak_abs_position: 0.0,
            observers,
            finish_reported: false,
        })
    }

    /// Attach an observer (builder pattern)
    pub fn with_observer(mut self, observer: Box<dyn TickObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Attach an observer; returns `&mut Self` for chaining
    pub fn add_observer(&mut self, observer: Box<dyn TickObserver>) -> &mut Self {
        self.observers.push(observer);
        self
    }

    /// Run exactly one tick
    ///
    /// Returns `None` once the configured tick count has been reached.
    pub fn step(&mut self) -> Option<TickRecord> {
        self.advance()
    }

    /// Run all remaining ticks
    pub fn run(&mut self) -> RunSummary {
        self.run_inner(None)
    }

    /// Run all remaining ticks, also reporting each one to `observer`
    pub fn run_with(&mut self, observer: &mut dyn TickObserver) -> RunSummary {
        self.run_inner(Some(observer))
    }

    fn run_inner(&mut self, mut extra: Option<&mut dyn TickObserver>) -> RunSummary {
        log::debug!(
            "running {} ticks from {}",
            self.config.tick_count.saturating_sub(self.tick),
            self.state
        );

        while let Some(record) = self.advance() {
            if let Some(observer) = extra.as_mut() {
                observer.on_tick(&record);
            }
        }

        let summary = self.summary();

        // Observers hear about the end of the run once
        if self.finish_reported {
            return summary;
        }
        self.finish_reported = true;

        for observer in self.observers.iter_mut() {
            observer.on_finish(&summary);
        }
        if let Some(observer) = extra {
            observer.on_finish(&summary);
        }
        summary
    }

    fn advance(&mut self) -> Option<TickRecord> {
        if self.tick >= self.config.tick_count {
            self.state = LoopState::Finished { ticks: self.tick };
            return None;
        }

        let dt = self.config.dt;
        let measurement = self.plant.update(self.control, dt);
        let estimate = self.estimator.update(measurement);
        let control = self.controller.update(estimate);

        let record = TickRecord {
            tick: self.tick,
            time: (self.tick + 1) as f64 * dt,
            measurement,
            estimate,
            control,
        };

        self.control = control;
        self.last_measurement = measurement;
        self.last_estimate = estimate;
        self.peak_abs_control = self.peak_abs_control.max(control.abs());
        self.peak_abs_position = self.peak_abs_position.max(measurement.position.abs());
        self.tick += 1;

        self.state = if self.tick >= self.config.tick_count {
            LoopState::Finished { ticks: self.tick }
        } else {
            LoopState::Running { tick: self.tick }
        };

        log::trace!("{}", record.log_summary());

        for observer in self.observers.iter_mut() {
            observer.on_tick(&record);
        }

        Some(record)
    }

    /// Summary of everything run so far
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.tick,
            sim_time: self.tick as f64 * self.config.dt,
            final_measurement: self.last_measurement,
            final_estimate: self.last_estimate,
            final_control: self.control,
            peak_abs_control: self.peak_abs_control,
            peak_abs_position: self.peak_abs_position,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of ticks executed so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Control input that the next tick will apply
    pub fn control(&self) -> f64 {
        self.control
    }

    pub fn is_finished(&self) -> bool {
        self.tick >= self.config.tick_count
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn plant(&self) -> &P {
        &self.plant
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Tear the loop down, handing the components back
    pub fn into_parts(self) -> (P, E, C) {
        (self.plant, self.estimator, self.controller)
    }
}
