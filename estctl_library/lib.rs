//! # estctl Standard Library
//!
//! Concrete components for the estctl control loop.
//!
//! ## Structure
//!
//! ```text
//! estctl_library/
//! ── algorithms/
//!    ── plant/       # Semi-implicit Euler integrator plant
//!    ── estimator/   # Pass-through estimator
//!    ── pd/          # PD controller with optional saturation
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use estctl_library::{IntegratorPlant, PassThroughEstimator, PdController};
//! use estctl_core::{ControlLoop, LoopConfig};
//!
//! let control_loop = ControlLoop::new(
//!     IntegratorPlant::default(),
//!     PassThroughEstimator::default(),
//!     PdController::with_limits(0.1, 0.05, -2.0, 2.0)?,
//!     LoopConfig::standard(),
//! )?;
//! # Ok::<(), estctl_core::EstctlError>(())
//! ```

pub mod algorithms;

// Re-export core traits needed to drive the components
pub use estctl_core::core::{Controller, Estimator, Plant, State};

// Re-export components at the crate root for convenience
pub use algorithms::estimator::PassThroughEstimator;
pub use algorithms::pd::PdController;
pub use algorithms::plant::IntegratorPlant;
