use crate::core::LogSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One-dimensional kinematic state
///
/// The only value exchanged between plant, estimator and controller. It is
/// copied at every hand-off; no component ever holds a reference to another
/// component's state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct State {
    /// Position (unit-agnostic)
    pub position: f64,
    /// Velocity, d(position)/dt
    pub velocity: f64,
}

impl State {
    /// Origin at rest
    pub const ZERO: State = State {
        position: 0.0,
        velocity: 0.0,
    };

    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Check if both fields are finite
    ///
    /// Components do not enforce this; it is exposed so callers can detect
    /// numeric blow-up after the fact.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

impl From<(f64, f64)> for State {
    fn from((position, velocity): (f64, f64)) -> Self {
        Self { position, velocity }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(pos={}, vel={})", self.position, self.velocity)
    }
}

impl LogSummary for State {
    fn log_summary(&self) -> String {
        format!("pos={:.4} vel={:.4}", self.position, self.velocity)
    }
}
