//! # estctl
//!
//! Discrete-time closed-loop simulation of a 1D plant, a state estimator and
//! a PD controller.
//!
//! ## Quick Start
//!
//! ```rust
//! use estctl::prelude::*;
//!
//! let params = SimParams::default();
//! let mut control_loop = build_loop(&params)?;
//!
//! let summary = control_loop.run();
//! assert_eq!(summary.ticks, 1000);
//! # Ok::<(), estctl::EstctlError>(())
//! ```
//!
//! ## Features
//!
//! - **Semi-implicit Euler plant** with explicit timestep
//! - **Pluggable estimator and controller** behind small traits
//! - **Actuator saturation** validated at construction
//! - **YAML / TOML / JSON configuration**

// Re-export core components
pub use estctl_core::{self, *};

// Re-export standard library with alias
pub use estctl_library as library;

pub mod simulation;

pub use simulation::{build_loop, DefaultLoop};

/// The estctl prelude - everything you need to assemble and run a loop
pub mod prelude {
    // Component traits and state
    pub use estctl_core::core::{Controller, Estimator, Plant, State};

    // Loop driver
    pub use estctl_core::scheduling::{
        ControlLoop, LoopConfig, LoopState, RunSummary, TickObserver, TickRecord,
        TrajectoryRecorder,
    };

    // Configuration
    pub use estctl_core::params::{ControllerParams, EstimatorParams, PlantParams, SimParams};

    // Error types
    pub use estctl_core::error::{EstctlError, EstctlResult};
    pub type Result<T> = EstctlResult<T>;

    // Standard components
    pub use estctl_library::{IntegratorPlant, PassThroughEstimator, PdController};

    pub use crate::simulation::{build_loop, DefaultLoop};

    // Common traits
    pub use serde::{Deserialize, Serialize};

    // Re-export anyhow for error handling
    pub use anyhow::{anyhow, bail, ensure, Context, Result as AnyResult};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get estctl version
pub fn version() -> &'static str {
    VERSION
}
