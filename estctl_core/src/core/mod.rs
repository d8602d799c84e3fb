//! # Core types and traits for estctl
//!
//! This module contains the fundamental building blocks of the loop:
//!
//! - **State**: the position/velocity pair exchanged between components
//! - **Plant / Estimator / Controller**: the three component seams
//! - **LogSummary**: compact log rendering for values crossing those seams
//!
//! ## Tick Lifecycle
//!
//! Every tick runs the components in a fixed order:
//! 1. **Plant** - integrates the previous control input over `dt`
//! 2. **Estimator** - turns the new measurement into an estimate
//! 3. **Controller** - computes the control input for the next tick

pub mod component;
pub mod state;
pub mod summary;

pub use component::{Controller, Estimator, Plant};
pub use state::State;
pub use summary::LogSummary;
