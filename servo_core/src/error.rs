//! Configuration errors
//!
//! Every error in this crate is raised while constructing a component. Once a
//! [`Servo`](crate::Servo), [`PidController`](crate::PidController) or
//! [`SensorMapper`](crate::SensorMapper) exists, its operations cannot fail.

use thiserror::Error;

/// Invalid construction parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid output range: min {min} must be below max {max}")]
    InvalidOutputRange { min: f64, max: f64 },

    #[error("Invalid sensor input range: min {min} must be below max {max}")]
    InvalidInputRange { min: f64, max: f64 },

    #[error("Target {target} is outside the output range [{min}, {max}]")]
    TargetOutOfRange { target: f64, min: f64, max: f64 },

    #[error("Gain {name} must be finite, got {value}")]
    InvalidGain { name: &'static str, value: f64 },

    #[error("Integral limit must be finite and positive, got {0}")]
    InvalidIntegralLimit(f64),
}

pub type ServoResult<T> = Result<T, ConfigError>;
