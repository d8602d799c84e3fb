//! PD (Proportional-Derivative) Controller
//!
//! Regulates position to a target while damping velocity:
//!
//! ```text
//! u = -kp * (position - target) - kd * velocity
//! ```
//!
//! With the default target of 0 this is the regulator to the origin,
//! `u = -kp * position - kd * velocity`.
//!
//! # Features
//!
//! - Gains fixed at construction
//! - Optional actuator saturation (both or one side)
//! - Inverted limits rejected at construction
//!
//! # Example
//!
//! ```rust
//! use estctl_library::{Controller, PdController, State};
//!
//! let mut pd = PdController::new(0.1, 0.05); // kp, kd
//! let u = pd.update(State::new(6.0, 1.0));
//! assert!((u + 0.65).abs() < 1e-12);
//!
//! // Saturated variant
//! let mut pd = PdController::with_limits(0.1, 0.05, -2.0, 2.0)?;
//! assert_eq!(pd.update(State::new(100.0, 0.0)), -2.0);
//! # Ok::<(), estctl_core::EstctlError>(())
//! ```

use estctl_core::core::{Controller, State};
use estctl_core::error::{EstctlError, EstctlResult};
use estctl_core::params::ControllerParams;

/// PD Controller
#[derive(Debug, Clone, PartialEq)]
pub struct PdController {
    kp: f64, // Proportional gain
    kd: f64, // Derivative gain

    target: f64,

    limits: Option<(f64, f64)>, // (u_min, u_max)
}

impl Default for PdController {
    fn default() -> Self {
        Self::new(0.1, 0.05)
    }
}

impl PdController {
    /// Create an unsaturated PD controller regulating to the origin
    pub fn new(kp: f64, kd: f64) -> Self {
        Self {
            kp,
            kd,
            target: 0.0,
            limits: None,
        }
    }

    /// Create a PD controller whose output is clamped to `[u_min, u_max]`
    ///
    /// Fails with [`EstctlError::InvalidLimits`] when `u_min > u_max` or either
    /// limit is NaN.
    pub fn with_limits(kp: f64, kd: f64, u_min: f64, u_max: f64) -> EstctlResult<Self> {
        if u_min.is_nan() || u_max.is_nan() || u_min > u_max {
            return Err(EstctlError::InvalidLimits { u_min, u_max });
        }

        Ok(Self {
            limits: Some((u_min, u_max)),
            ..Self::new(kp, kd)
        })
    }

    /// Build from configuration, validating gains and limits
    pub fn from_params(params: &ControllerParams) -> EstctlResult<Self> {
        params.validate()?;

        let controller = Self {
            kp: params.kp,
            kd: params.kd,
            target: params.target,
            limits: params.output_limits()?,
        };

        match controller.limits {
            Some((u_min, u_max)) => log::debug!(
                "pd controller: kp={} kd={} target={} limits=[{}, {}]",
                controller.kp,
                controller.kd,
                controller.target,
                u_min,
                u_max
            ),
            None => log::debug!(
                "pd controller: kp={} kd={} target={} unlimited",
                controller.kp,
                controller.kd,
                controller.target
            ),
        }

        Ok(controller)
    }

    /// Regulate to `target` instead of the origin (builder pattern)
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    /// Raw PD law, before saturation
    pub fn unclamped(&self, estimate: &State) -> f64 {
        -self.kp * (estimate.position - self.target) - self.kd * estimate.velocity
    }

    /// PD law followed by saturation, if configured
    pub fn compute(&self, estimate: &State) -> f64 {
        let u = self.unclamped(estimate);
        match self.limits {
            Some((u_min, u_max)) => u.clamp(u_min, u_max),
            None => u,
        }
    }

    /// True if the limits change the output for this estimate
    pub fn is_saturated(&self, estimate: &State) -> bool {
        match self.limits {
            Some((u_min, u_max)) => {
                let u = self.unclamped(estimate);
                u < u_min || u > u_max
            }
            None => false,
        }
    }

    /// Get current gains (kp, kd)
    pub fn gains(&self) -> (f64, f64) {
        (self.kp, self.kd)
    }

    /// Get output limits (u_min, u_max), if any
    pub fn limits(&self) -> Option<(f64, f64)> {
        self.limits
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Controller for PdController {
    fn name(&self) -> &'static str {
        "pd_controller"
    }

    fn update(&mut self, estimate: State) -> f64 {
        self.compute(&estimate)
    }
}
