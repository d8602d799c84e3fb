//! Error types for estctl
//!
//! Every fallible operation in the workspace is a configuration step: building
//! a controller, validating a loop config, or loading a parameter file. Once a
//! loop is constructed, ticking it cannot fail.

use thiserror::Error;

/// Main error type for estctl operations
#[derive(Debug, Error)]
pub enum EstctlError {
    /// Generic configuration problem (bad value, unknown file format, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Actuator limits that cannot form a clamp interval
    #[error("Invalid actuator limits: u_min ({u_min}) must not exceed u_max ({u_max})")]
    InvalidLimits { u_min: f64, u_max: f64 },

    /// Loop timestep that is zero, negative or not finite
    #[error("Invalid timestep: {0} (must be finite and greater than zero)")]
    InvalidTimestep(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EstctlError {
    /// Shorthand for [`EstctlError::Config`]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors raised by validation rather than I/O or parsing
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InvalidLimits { .. } | Self::InvalidTimestep(_)
        )
    }
}

/// Result type alias for estctl operations
pub type EstctlResult<T> = Result<T, EstctlError>;
