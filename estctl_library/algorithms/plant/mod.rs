//! Integrator Plant
//!
//! Discrete-time 1D plant: the control input is an acceleration, integrated
//! with semi-implicit (symplectic) Euler. Velocity is advanced first and the
//! new velocity is used to advance position.
//!
//! # Features
//!
//! - Explicit timestep on every update (`update_fixed_step` for `dt = 1`)
//! - Configurable initial condition (default: position 5, velocity 1)
//! - Optional viscous damping and constant disturbance
//!
//! # Example
//!
//! ```rust
//! use estctl_library::{IntegratorPlant, Plant};
//!
//! let mut plant = IntegratorPlant::default(); // starts at (5.0, 1.0)
//!
//! let state = plant.update(0.0, 1.0);
//! assert_eq!(state.position, 6.0);
//! assert_eq!(state.velocity, 1.0);
//! ```

use estctl_core::core::{Plant, State};
use estctl_core::params::PlantParams;

/// Semi-implicit Euler integrator plant
#[derive(Debug, Clone)]
pub struct IntegratorPlant {
    initial_state: State,
    true_state: State,

    damping: f64,     // Viscous damping coefficient
    disturbance: f64, // Constant external acceleration
}

impl Default for IntegratorPlant {
    fn default() -> Self {
        Self::from_params(&PlantParams::default())
    }
}

impl IntegratorPlant {
    /// Create a plant starting from `initial_state`, without damping or disturbance
    pub fn new(initial_state: State) -> Self {
        Self {
            initial_state,
            true_state: initial_state,
            damping: 0.0,
            disturbance: 0.0,
        }
    }

    pub fn from_params(params: &PlantParams) -> Self {
        log::debug!(
            "integrator plant: initial {} damping={} disturbance={}",
            params.initial_state(),
            params.damping,
            params.disturbance
        );

        Self {
            initial_state: params.initial_state(),
            true_state: params.initial_state(),
            damping: params.damping,
            disturbance: params.disturbance,
        }
    }

    /// Set viscous damping (acceleration term `-damping * velocity`)
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set a constant external acceleration
    pub fn with_disturbance(mut self, disturbance: f64) -> Self {
        self.disturbance = disturbance;
        self
    }

    /// Restore the initial condition
    pub fn reset(&mut self) {
        self.true_state = self.initial_state;
    }

    pub fn initial_state(&self) -> State {
        self.initial_state
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn disturbance(&self) -> f64 {
        self.disturbance
    }

    /// Acceleration produced by `control_input` at the current state
    pub fn acceleration(&self, control_input: f64) -> f64 {
        control_input - self.damping * self.true_state.velocity + self.disturbance
    }
}

impl Plant for IntegratorPlant {
    fn name(&self) -> &'static str {
        "integrator_plant"
    }

    fn update(&mut self, control_input: f64, dt: f64) -> State {
        let acceleration = self.acceleration(control_input);

        self.true_state.velocity += acceleration * dt;
        self.true_state.position += self.true_state.velocity * dt;

        self.true_state
    }

    fn state(&self) -> State {
        self.true_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_initial_condition() {
        let plant = IntegratorPlant::default();
        assert_eq!(plant.state(), State::new(5.0, 1.0));
    }

    #[test]
    fn test_unit_step_without_input() {
        let mut plant = IntegratorPlant::default();

        let state = plant.update(0.0, 1.0);

        assert_eq!(state, State::new(6.0, 1.0));
        assert_eq!(plant.state(), state);
    }

    #[test]
    fn test_zero_input_is_pure_integration() {
        for &(position, velocity) in &[(0.0, 0.0), (5.0, 1.0), (-3.25, 2.5), (1e3, -7.0)] {
            for &dt in &[0.001, 0.01, 0.5, 1.0] {
                let mut plant = IntegratorPlant::new(State::new(position, velocity));
                let state = plant.update(0.0, dt);

                assert_eq!(state.velocity, velocity);
                assert_eq!(state.position, position + velocity * dt);
            }
        }
    }

    #[test]
    fn test_velocity_update_is_exact() {
        for &control in &[-2.0, -0.65, 0.0, 0.3, 4.0] {
            for &dt in &[0.01, 0.1, 1.0] {
                let mut plant = IntegratorPlant::default();
                let before = plant.state();
                let state = plant.update(control, dt);

                assert_eq!(state.velocity, before.velocity + control * dt);
            }
        }
    }

    #[test]
    fn test_acceleration_is_input_without_extras() {
        let plant = IntegratorPlant::new(State::new(3.0, -7.5));

        for &u in &[-2.0, -0.551, 0.0, 1e-9, 4.0] {
            assert_eq!(plant.acceleration(u), u);
        }
    }

    #[test]
    fn test_semi_implicit_ordering() {
        let mut plant = IntegratorPlant::new(State::new(0.0, 0.0));

        // Velocity is updated first, so position moves on the very first step
        let state = plant.update(2.0, 0.5);

        assert_eq!(state.velocity, 1.0);
        assert_eq!(state.position, 0.5);
    }

    #[test]
    fn test_fixed_step_matches_unit_dt() {
        let mut a = IntegratorPlant::default();
        let mut b = IntegratorPlant::default();

        for &u in &[0.0, -0.65, 0.2, 1.5] {
            assert_eq!(a.update_fixed_step(u), b.update(u, 1.0));
        }
    }

    #[test]
    fn test_damping_and_disturbance() {
        let params = PlantParams {
            initial_position: 0.0,
            initial_velocity: 2.0,
            damping: 0.5,
            disturbance: -1.0,
        };
        let mut plant = IntegratorPlant::from_params(&params);

        // a = u - 0.5 * 2.0 - 1.0 = u - 2.0
        let state = plant.update(3.0, 0.1);

        assert_relative_eq!(state.velocity, 2.1, epsilon = 1e-12);
        assert_relative_eq!(state.position, 0.21, epsilon = 1e-12);
    }

    #[test]
    fn test_disturbance_drifts_at_rest() {
        let mut plant = IntegratorPlant::new(State::ZERO).with_disturbance(-1.0);

        for _ in 0..10 {
            plant.update(0.0, 0.1);
        }

        assert!(plant.state().velocity < 0.0);
        assert!(plant.state().position < 0.0);
    }

    #[test]
    fn test_reset() {
        let mut plant = IntegratorPlant::default().with_damping(0.2);

        for _ in 0..5 {
            plant.update(1.0, 0.1);
        }
        assert_ne!(plant.state(), plant.initial_state());

        plant.reset();

        assert_eq!(plant.state(), State::new(5.0, 1.0));
        assert_eq!(plant.damping(), 0.2);
    }
}
