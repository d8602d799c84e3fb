//! # estctl Core
//!
//! The core runtime for the estctl control-loop simulator.
//!
//! A single discrete-time feedback loop is built from three components that
//! exchange [`State`] values by copy:
//!
//! - **Plant**: advances the true physical state given a control input
//! - **Estimator**: turns a raw measurement into a state estimate
//! - **Controller**: turns an estimate into the next control input
//! - **Scheduling**: the [`ControlLoop`] driver and its tick observers
//!
//! Concrete components live in `estctl_library`; this crate holds the seams.
//!
//! ## Quick Start
//!
//! ```rust
//! use estctl_core::{Controller, Estimator, Plant, State};
//! use estctl_core::{ControlLoop, LoopConfig};
//!
//! struct Hold(State);
//!
//! impl Plant for Hold {
//!     fn name(&self) -> &'static str { "hold" }
//!     fn update(&mut self, _u: f64, _dt: f64) -> State { self.0 }
//!     fn state(&self) -> State { self.0 }
//! }
//!
//! struct Mirror(State);
//!
//! impl Estimator for Mirror {
//!     fn name(&self) -> &'static str { "mirror" }
//!     fn update(&mut self, m: State) -> State { self.0 = m; m }
//!     fn estimate(&self) -> State { self.0 }
//! }
//!
//! struct Zero;
//!
//! impl Controller for Zero {
//!     fn name(&self) -> &'static str { "zero" }
//!     fn update(&mut self, _estimate: State) -> f64 { 0.0 }
//! }
//!
//! let mut control_loop = ControlLoop::new(
//!     Hold(State::new(1.0, 0.0)),
//!     Mirror(State::ZERO),
//!     Zero,
//!     LoopConfig::default().with_tick_count(3),
//! )?;
//! let summary = control_loop.run();
//! assert_eq!(summary.ticks, 3);
//! # Ok::<(), estctl_core::EstctlError>(())
//! ```

pub mod core;
pub mod error;
pub mod params;
pub mod scheduling;

// Re-export commonly used types for easy access
pub use core::{Controller, Estimator, LogSummary, Plant, State};
pub use error::{EstctlError, EstctlResult};
pub use params::{ControllerParams, EstimatorParams, ParamsFormat, PlantParams, SimParams};
pub use scheduling::{
    ControlLoop, LoopConfig, LoopState, ReportObserver, RunSummary, TickObserver, TickRecord,
    TrajectoryRecorder,
};
