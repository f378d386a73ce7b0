//! PID (Proportional-Integral-Derivative) Controller
//!
//! Discrete, step-based feedback controller with a fixed set-point and a
//! clamped output. One call to [`PidController::regulate`] is one control
//! cycle; there is no time step, so the integral is a plain running sum of
//! error and the derivative is the difference between consecutive errors.
//!
//! # Features
//!
//! - Proportional, integral, and derivative terms
//! - Output clamping to a fixed range
//! - Optional integral limit (anti-windup), disabled by default
//!
//! # Example
//!
//! ```rust
//! use servo_core::algorithms::pid::PidController;
//!
//! // Target 90 degrees, output range 30 - 150 degrees, Kp / Ki / Kd
//! let mut pid = PidController::new(90.0, 30.0, 150.0, 1.0, 0.01, 0.1).unwrap();
//!
//! let output = pid.regulate(150.0);
//! assert_eq!(output, 30.0);
//! ```

use crate::error::{ConfigError, ServoResult};

/// PID Controller
#[derive(Debug, Clone)]
pub struct PidController {
    target: f64,

    kp: f64, // Proportional gain
    ki: f64, // Integral gain
    kd: f64, // Derivative gain

    output_min: f64,
    output_max: f64,

    integral: f64,
    prev_error: f64,
    output: f64,

    integral_limit: Option<f64>,
}

impl PidController {
    /// Create new PID controller
    ///
    /// # Arguments
    /// * `target` - Fixed set-point, must lie within `[output_min, output_max]`
    /// * `output_min` / `output_max` - Output clamp bounds
    /// * `kp`, `ki`, `kd` - Tuning gains
    pub fn new(
        target: f64,
        output_min: f64,
        output_max: f64,
        kp: f64,
        ki: f64,
        kd: f64,
    ) -> ServoResult<Self> {
        // A non-finite span also rejects non-finite bounds
        if !(output_max - output_min).is_finite() || output_min >= output_max {
            return Err(ConfigError::InvalidOutputRange {
                min: output_min,
                max: output_max,
            });
        }

        if !(output_min..=output_max).contains(&target) {
            return Err(ConfigError::TargetOutOfRange {
                target,
                min: output_min,
                max: output_max,
            });
        }

        for (name, value) in [("kp", kp), ("ki", ki), ("kd", kd)] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidGain { name, value });
            }
        }

        Ok(Self {
            target,
            kp,
            ki,
            kd,
            output_min,
            output_max,
            integral: 0.0,
            prev_error: 0.0,
            output: 0.0,
            integral_limit: None,
        })
    }

    /// Limit the integral to `[-limit, limit]` (anti-windup)
    ///
    /// Off by default. Enabling it changes the output sequence once the
    /// integral saturates.
    pub fn with_integral_limit(mut self, limit: f64) -> ServoResult<Self> {
        if !limit.is_finite() || limit <= 0.0 {
            return Err(ConfigError::InvalidIntegralLimit(limit));
        }
        self.integral_limit = Some(limit);
        Ok(self)
    }

    /// Run one control cycle
    ///
    /// # Arguments
    /// * `process_variable` - Current measured value
    ///
    /// # Returns
    /// Clamped control output, also stored for [`output`](Self::output)
    pub fn regulate(&mut self, process_variable: f64) -> f64 {
        let error = self.target - process_variable;

        self.integral += error;
        if let Some(limit) = self.integral_limit {
            self.integral = self.integral.clamp(-limit, limit);
        }

        let derivative = error - self.prev_error;

        let raw = self.kp * error + self.ki * self.integral + self.kd * derivative;
        self.output = raw.clamp(self.output_min, self.output_max);
        self.prev_error = error;

        tracing::trace!(
            error,
            integral = self.integral,
            derivative,
            raw,
            output = self.output,
            "pid regulate"
        );

        self.output
    }

    /// Reset controller state (gains, target and limits are kept)
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
        self.output = 0.0;
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Last clamped output (0 before the first cycle)
    pub fn output(&self) -> f64 {
        self.output
    }

    pub fn integral(&self) -> f64 {
        self.integral
    }

    pub fn prev_error(&self) -> f64 {
        self.prev_error
    }

    /// Get current gains (kp, ki, kd)
    pub fn gains(&self) -> (f64, f64, f64) {
        (self.kp, self.ki, self.kd)
    }

    /// Get output clamp bounds (min, max)
    pub fn output_range(&self) -> (f64, f64) {
        (self.output_min, self.output_max)
    }

    pub fn integral_limit(&self) -> Option<f64> {
        self.integral_limit
    }
}
