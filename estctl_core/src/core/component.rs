use crate::core::State;

/// Simulated physical system driven by the loop
///
/// Implementations own the true state; the loop only ever sees copies of it.
pub trait Plant: Send {
    /// Get the component's name (used in log lines)
    fn name(&self) -> &'static str;

    /// Advance the true state by one step of length `dt` under `control_input`
    ///
    /// Returns the new state by value.
    fn update(&mut self, control_input: f64, dt: f64) -> State;

    /// Current true state, without advancing it
    fn state(&self) -> State;

    /// Fixed-step variant of [`Plant::update`] with `dt = 1`
    fn update_fixed_step(&mut self, control_input: f64) -> State {
        self.update(control_input, 1.0)
    }
}

/// Turns a raw measurement into a state estimate
///
/// Stateful so that filters can accumulate belief across ticks.
pub trait Estimator: Send {
    /// Get the component's name (used in log lines)
    fn name(&self) -> &'static str;

    /// Fold one measurement into the estimate and return the new estimate
    fn update(&mut self, measurement: State) -> State;

    /// Latest estimate, without updating it
    fn estimate(&self) -> State;
}

/// Computes the actuator input from a state estimate
pub trait Controller: Send {
    /// Get the component's name (used in log lines)
    fn name(&self) -> &'static str;

    /// Compute the control input for the next tick
    fn update(&mut self, estimate: State) -> f64;
}

impl<P: Plant + ?Sized> Plant for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn update(&mut self, control_input: f64, dt: f64) -> State {
        (**self).update(control_input, dt)
    }

    fn state(&self) -> State {
        (**self).state()
    }

    fn update_fixed_step(&mut self, control_input: f64) -> State {
        (**self).update_fixed_step(control_input)
    }
}

impl<E: Estimator + ?Sized> Estimator for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn update(&mut self, measurement: State) -> State {
        (**self).update(measurement)
    }

    fn estimate(&self) -> State {
        (**self).estimate()
    }
}

impl<C: Controller + ?Sized> Controller for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn update(&mut self, estimate: State) -> f64 {
        (**self).update(estimate)
    }
}
