//! Pass-through Estimator
//!
//! Identity estimator: the estimate is the latest measurement. It keeps its
//! own copy of the estimate and accepts filter gains so that a real filter
//! (alpha-beta, complementary, Kalman) can replace it without changing how
//! the loop is wired.
//!
//! # Example
//!
//! ```rust
//! use estctl_library::{Estimator, PassThroughEstimator, State};
//!
//! let mut estimator = PassThroughEstimator::default();
//! assert_eq!(estimator.estimate(), State::ZERO);
//!
//! let estimate = estimator.update(State::new(6.0, 1.0));
//! assert_eq!(estimate, State::new(6.0, 1.0));
//! ```

use estctl_core::core::{Estimator, State};
use estctl_core::params::EstimatorParams;

/// Identity estimator
#[derive(Debug, Clone, Default)]
pub struct PassThroughEstimator {
    estimated_state: State,
    // Accepted for interface compatibility, unused by the identity law
    params: EstimatorParams,
}

impl PassThroughEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator carrying filter gains
    ///
    /// The gains are stored but do not affect the estimate.
    pub fn from_params(params: &EstimatorParams) -> Self {
        log::debug!(
            "pass-through estimator: ignoring alpha={} beta={}",
            params.alpha,
            params.beta
        );

        Self {
            estimated_state: State::ZERO,
            params: *params,
        }
    }

    pub fn params(&self) -> &EstimatorParams {
        &self.params
    }

    /// Forget the current estimate
    pub fn reset(&mut self) {
        self.estimated_state = State::ZERO;
    }
}

impl Estimator for PassThroughEstimator {
    fn name(&self) -> &'static str {
        "pass_through_estimator"
    }

    fn update(&mut self, measurement: State) -> State {
        self.estimated_state = measurement;
        self.estimated_state
    }

    fn estimate(&self) -> State {
        self.estimated_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let estimator = PassThroughEstimator::new();
        assert_eq!(estimator.estimate(), State::ZERO);
    }

    #[test]
    fn test_identity_law() {
        let mut estimator = PassThroughEstimator::new();

        for &(p, v) in &[(6.0, 1.0), (-1e6, 3.5), (0.0, -0.0), (1e-300, 42.0)] {
            let measurement = State::new(p, v);
            assert_eq!(estimator.update(measurement), measurement);
            assert_eq!(estimator.estimate(), measurement);
        }
    }

    #[test]
    fn test_gains_do_not_change_estimate() {
        let params = EstimatorParams {
            alpha: 0.9,
            beta: 0.9,
        };
        let mut filtered = PassThroughEstimator::from_params(&params);
        let mut plain = PassThroughEstimator::new();

        let measurement = State::new(3.0, -1.0);
        assert_eq!(filtered.update(measurement), plain.update(measurement));
        assert_eq!(filtered.params().alpha, 0.9);
    }

    #[test]
    fn test_reset() {
        let mut estimator = PassThroughEstimator::new();
        estimator.update(State::new(1.0, 2.0));
        estimator.reset();
        assert_eq!(estimator.estimate(), State::ZERO);
    }
}
