//! Tick observers
//!
//! Reporting and recording hang off the loop driver instead of living inside
//! the numeric components, which stay silent.

use super::control_loop::RunSummary;
use crate::core::{LogSummary, State};
use serde::{Deserialize, Serialize};

/// Everything produced during one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    /// Zero-based tick index
    pub tick: u64,
    /// Simulated time at the end of the tick
    pub time: f64,
    /// Plant output (true state)
    pub measurement: State,
    /// Estimator output
    pub estimate: State,
    /// Controller output, applied on the next tick
    pub control: f64,
}

impl LogSummary for TickRecord {
    fn log_summary(&self) -> String {
        format!(
            "step {} t={:.3}s | plant {} | estimate {} | u={}",
            self.tick,
            self.time,
            self.measurement.log_summary(),
            self.estimate.log_summary(),
            self.control.log_summary()
        )
    }
}

/// Callback invoked by the loop driver after every tick
pub trait TickObserver: Send {
    fn on_tick(&mut self, record: &TickRecord);

    /// Called once when the last tick has run
    fn on_finish(&mut self, _summary: &RunSummary) {}
}

impl<F> TickObserver for F
where
    F: FnMut(&TickRecord) + Send,
{
    fn on_tick(&mut self, record: &TickRecord) {
        self(record)
    }
}

/// Logs one line every `every` ticks, starting at tick 0
#[derive(Debug, Clone)]
pub struct ReportObserver {
    every: u64,
    reported: u64,
}

impl ReportObserver {
    /// A cadence of 0 is treated as 1
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            reported: 0,
        }
    }

    pub fn every(&self) -> u64 {
        self.every
    }

    /// Number of report lines emitted so far
    pub fn reported(&self) -> u64 {
        self.reported
    }

    pub fn should_report(&self, tick: u64) -> bool {
        tick % self.every == 0
    }
}

impl TickObserver for ReportObserver {
    fn on_tick(&mut self, record: &TickRecord) {
        if self.should_report(record.tick) {
            self.reported += 1;
            log::info!("{}", record.log_summary());
        }
    }

    fn on_finish(&mut self, summary: &RunSummary) {
        log::info!(
            "finished {} ticks ({:.3}s simulated) | final {} | u={}",
            summary.ticks,
            summary.sim_time,
            summary.final_measurement.log_summary(),
            summary.final_control.log_summary()
        );
    }
}

/// In-memory trajectory capture
///
/// Keeps every `interval`-th tick. Nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryRecorder {
    interval: u64,
    records: Vec<TickRecord>,
}

impl TrajectoryRecorder {
    /// Record every `interval`-th tick (0 is treated as 1)
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            records: Vec::new(),
        }
    }

    /// Record every tick, pre-allocating for `ticks` entries
    pub fn with_capacity(ticks: usize) -> Self {
        Self {
            interval: 1,
            records: Vec::with_capacity(ticks),
        }
    }

    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TickRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Measured positions in tick order
    pub fn positions(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.measurement.position).collect()
    }

    /// Control inputs in tick order
    pub fn controls(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.control).collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl TickObserver for TrajectoryRecorder {
    fn on_tick(&mut self, record: &TickRecord) {
        if record.tick % self.interval.max(1) == 0 {
            self.records.push(*record);
        }
    }
}
