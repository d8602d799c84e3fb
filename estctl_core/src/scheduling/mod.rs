//! # estctl Scheduling System
//!
//! Drives the plant, estimator and controller through a bounded number of
//! discrete ticks:
//!
//! - **ControlLoop**: the tick driver and its `Ready -> Running -> Finished` lifecycle
//! - **LoopConfig**: timestep, tick count and reporting cadence
//! - **Observers**: per-tick callbacks for reporting and in-memory recording
//!
//! ## Usage
//!
//! ```rust,ignore
//! use estctl_core::{ControlLoop, LoopConfig, TrajectoryRecorder};
//!
//! let mut control_loop = ControlLoop::new(plant, estimator, controller, LoopConfig::standard())?;
//! let mut recorder = TrajectoryRecorder::new(10); // keep every 10th tick
//! let summary = control_loop.run_with(&mut recorder);
//! ```

pub mod config;
pub mod control_loop;
pub mod observer;

pub use config::LoopConfig;
pub use control_loop::{ControlLoop, LoopState, RunSummary};
pub use observer::{ReportObserver, TickObserver, TickRecord, TrajectoryRecorder};
