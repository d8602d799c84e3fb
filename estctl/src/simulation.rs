//! Assembly of the standard pipeline from configuration

use estctl_core::error::EstctlResult;
use estctl_core::params::SimParams;
use estctl_core::scheduling::ControlLoop;
use estctl_library::{IntegratorPlant, PassThroughEstimator, PdController};

/// Integrator plant, pass-through estimator and PD controller
pub type DefaultLoop = ControlLoop<IntegratorPlant, PassThroughEstimator, PdController>;

/// Build the standard loop from `params`
///
/// Every section is validated before any component is constructed, so an
/// invalid configuration never produces a loop.
pub fn build_loop(params: &SimParams) -> EstctlResult<DefaultLoop> {
    params.validate()?;

    let plant = IntegratorPlant::from_params(&params.plant);
    let estimator = PassThroughEstimator::from_params(&params.estimator);
    let controller = PdController::from_params(&params.controller)?;

    ControlLoop::new(plant, estimator, controller, params.run)
}
