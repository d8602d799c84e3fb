//! Pure computational components for the control loop
//!
//! No I/O and no console output: each component is a function of its
//! configuration, its own private state and its inputs. Reporting is done by
//! observers attached to the loop driver.
//!
//! # Available Algorithms
//!
//! ## Plant
//! - **plant**: 1D integrator of acceleration and velocity, optional damping and disturbance
//!
//! ## State Estimation
//! - **estimator**: identity estimator, placeholder for a real filter
//!
//! ## Control
//! - **pd**: proportional-derivative regulator with actuator saturation

pub mod estimator;
pub mod pd;
pub mod plant;
