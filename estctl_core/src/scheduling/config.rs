//! Loop driver configuration and presets

use crate::error::{EstctlError, EstctlResult};
use serde::{Deserialize, Serialize};

/// Configuration for a [`ControlLoop`](super::ControlLoop) run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Timestep in seconds
    pub dt: f64,
    /// Number of ticks to run
    pub tick_count: u64,
    /// Log a report line every N ticks (disabled when `None`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_every: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            tick_count: 1000,
            report_every: None,
        }
    }
}

impl LoopConfig {
    /// 100 Hz for 1000 ticks with a report every 50 ticks
    pub fn standard() -> Self {
        Self {
            dt: 0.01,
            tick_count: 1000,
            report_every: Some(50),
        }
    }

    /// Unit timestep, no reporting
    ///
    /// Matches loops written against the fixed-step plant update.
    pub fn fixed_step(tick_count: u64) -> Self {
        Self {
            dt: 1.0,
            tick_count,
            report_every: None,
        }
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_tick_count(mut self, tick_count: u64) -> Self {
        self.tick_count = tick_count;
        self
    }

    pub fn with_report_every(mut self, every: u64) -> Self {
        self.report_every = Some(every);
        self
    }

    pub fn without_reports(mut self) -> Self {
        self.report_every = None;
        self
    }

    /// Simulated time covered by a full run
    pub fn duration(&self) -> f64 {
        self.tick_count as f64 * self.dt
    }

    pub fn validate(&self) -> EstctlResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(EstctlError::InvalidTimestep(self.dt));
        }
        if self.report_every == Some(0) {
            return Err(EstctlError::config("run.report_every must be at least 1"));
        }
        Ok(())
    }
}
