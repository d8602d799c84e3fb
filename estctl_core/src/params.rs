//! Simulation parameter system for estctl
//!
//! Typed configuration for every component plus the loop driver, loadable
//! from YAML, TOML or JSON. Missing fields fall back to the defaults of the
//! canonical configuration (plant at (5, 1), kp = 0.1, kd = 0.05, dt = 10 ms).

use crate::core::State;
use crate::error::{EstctlError, EstctlResult};
use crate::scheduling::LoopConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Plant configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantParams {
    /// Initial position (the initial disturbance)
    pub initial_position: f64,
    /// Initial velocity
    pub initial_velocity: f64,
    /// Viscous damping coefficient, subtracted as `damping * velocity`
    pub damping: f64,
    /// Constant external acceleration (gravity, load, ...)
    pub disturbance: f64,
}

impl Default for PlantParams {
    fn default() -> Self {
        Self {
            initial_position: 5.0,
            initial_velocity: 1.0,
            damping: 0.0,
            disturbance: 0.0,
        }
    }
}

impl PlantParams {
    pub fn initial_state(&self) -> State {
        State::new(self.initial_position, self.initial_velocity)
    }

    pub fn validate(&self) -> EstctlResult<()> {
        let fields = [
            ("plant.initial_position", self.initial_position),
            ("plant.initial_velocity", self.initial_velocity),
            ("plant.damping", self.damping),
            ("plant.disturbance", self.disturbance),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(EstctlError::config(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Estimator configuration
///
/// The pass-through estimator accepts these gains and ignores them; they are
/// kept for an alpha-beta style filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorParams {
    pub alpha: f64,
    pub beta: f64,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            beta: 0.1,
        }
    }
}

/// PD controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerParams {
    /// Proportional gain (position correction)
    pub kp: f64,
    /// Derivative gain (velocity damping)
    pub kd: f64,
    /// Position the controller regulates to
    pub target: f64,
    /// Upper actuator limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u_max: Option<f64>,
    /// Lower actuator limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u_min: Option<f64>,
}

impl Default for ControllerParams {
    fn default() -> Self {
        Self {
            kp: 0.1,
            kd: 0.05,
            target: 0.0,
            u_max: None,
            u_min: None,
        }
    }
}

impl ControllerParams {
    /// Set both actuator limits
    pub fn with_limits(mut self, u_min: f64, u_max: f64) -> Self {
        self.u_min = Some(u_min);
        self.u_max = Some(u_max);
        self
    }

    /// Resolve the configured limits into a clamp interval
    ///
    /// Returns `Ok(None)` when no limit is set. A missing side is unbounded.
    pub fn output_limits(&self) -> EstctlResult<Option<(f64, f64)>> {
        if self.u_min.is_none() && self.u_max.is_none() {
            return Ok(None);
        }

        let u_min = self.u_min.unwrap_or(f64::NEG_INFINITY);
        let u_max = self.u_max.unwrap_or(f64::INFINITY);

        // NaN compares false against everything
        if u_min.is_nan() || u_max.is_nan() || u_min > u_max {
            return Err(EstctlError::InvalidLimits { u_min, u_max });
        }

        Ok(Some((u_min, u_max)))
    }

    pub fn validate(&self) -> EstctlResult<()> {
        for (name, value) in [
            ("controller.kp", self.kp),
            ("controller.kd", self.kd),
            ("controller.target", self.target),
        ] {
            if !value.is_finite() {
                return Err(EstctlError::config(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        self.output_limits().map(|_| ())
    }
}

/// Full simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    pub plant: PlantParams,
    pub estimator: EstimatorParams,
    pub controller: ControllerParams,
    pub run: LoopConfig,
}

/// Supported parameter file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsFormat {
    Yaml,
    Toml,
    Json,
}

impl ParamsFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> EstctlResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(EstctlError::config(format!(
                "Unsupported parameter file '{}' (expected .yaml, .yml, .toml or .json)",
                path.display()
            ))),
        }
    }
}

impl SimParams {
    /// Check every section; the loop refuses to start on the first failure
    pub fn validate(&self) -> EstctlResult<()> {
        self.plant.validate()?;
        self.controller.validate()?;
        self.run.validate()?;
        Ok(())
    }

    /// Parse parameters from a string in the given format
    pub fn parse(content: &str, format: ParamsFormat) -> EstctlResult<Self> {
        let params: SimParams = match format {
            ParamsFormat::Yaml => serde_yaml::from_str(content)?,
            ParamsFormat::Toml => toml::from_str(content)?,
            ParamsFormat::Json => serde_json::from_str(content)?,
        };
        params.validate()?;
        Ok(params)
    }

    /// Render parameters in the given format
    pub fn render(&self, format: ParamsFormat) -> EstctlResult<String> {
        Ok(match format {
            ParamsFormat::Yaml => serde_yaml::to_string(self)?,
            ParamsFormat::Toml => toml::to_string_pretty(self)?,
            ParamsFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    /// Load parameters from a file, format chosen by extension
    pub fn load_from_disk(path: &Path) -> EstctlResult<Self> {
        let format = ParamsFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let params = Self::parse(&content, format)?;
        log::debug!("Loaded parameters from {}", path.display());
        Ok(params)
    }

    /// Save parameters to a file, format chosen by extension
    pub fn save_to_disk(&self, path: &Path) -> EstctlResult<()> {
        let format = ParamsFormat::from_path(path)?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, self.render(format)?)?;
        log::debug!("Saved parameters to {}", path.display());
        Ok(())
    }
}
