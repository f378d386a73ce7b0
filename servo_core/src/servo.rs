//! Servo Orchestrator
//!
//! Owns one [`PidController`] and a left/right pair of [`SensorMapper`]s, and
//! turns two raw TOF samples into one regulation step per [`Servo::cycle`].

use serde::{Deserialize, Serialize};

use crate::algorithms::pid::PidController;
use crate::algorithms::sensor_map::SensorMapper;
use crate::error::ServoResult;

/// How the two mapped sensor values become the PID's process variable
///
/// A single-input PID needs one scalar per cycle, so the servo must collapse
/// the left and right readings. `RightSupersedes` reproduces the emulator this
/// crate models, where the right-hand read is the last one taken before
/// regulation. `Difference` treats the pair as a relative steering reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorCombination {
    /// `pv = right` (left is still mapped and reported)
    #[default]
    RightSupersedes,
    /// `pv = (left + right) / 2`
    Average,
    /// `pv = target + (right - left)`
    Difference,
}

impl SensorCombination {
    pub fn combine(self, target: f64, left: f64, right: f64) -> f64 {
        match self {
            SensorCombination::RightSupersedes => right,
            SensorCombination::Average => (left + right) / 2.0,
            SensorCombination::Difference => target + (right - left),
        }
    }
}

/// Servo construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServoConfig {
    /// Target angle in degrees
    pub target_angle: f64,
    /// Minimum servo angle (full left)
    pub angle_min: f64,
    /// Maximum servo angle (full right)
    pub angle_max: f64,
    /// Minimum raw TOF reading
    pub input_min: f64,
    /// Maximum raw TOF reading
    pub input_max: f64,
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    #[serde(default)]
    pub combination: SensorCombination,
    /// Integral clamp (anti-windup); `None` leaves the integral unbounded
    #[serde(default)]
    pub integral_limit: Option<f64>,
}

impl Default for ServoConfig {
    /// Centered 90 degree target, 60 degrees of travel either side, 10-bit sensors
    fn default() -> Self {
        Self {
            target_angle: 90.0,
            angle_min: 30.0,
            angle_max: 150.0,
            input_min: 0.0,
            input_max: 1023.0,
            kp: 1.0,
            ki: 0.01,
            kd: 0.1,
            combination: SensorCombination::RightSupersedes,
            integral_limit: None,
        }
    }
}

impl ServoConfig {
    /// Default configuration with a custom target and angle range
    pub fn new(target_angle: f64, angle_min: f64, angle_max: f64) -> Self {
        Self {
            target_angle,
            angle_min,
            angle_max,
            ..Self::default()
        }
    }

    pub fn with_input_range(mut self, input_min: f64, input_max: f64) -> Self {
        self.input_min = input_min;
        self.input_max = input_max;
        self
    }

    pub fn with_gains(mut self, kp: f64, ki: f64, kd: f64) -> Self {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
        self
    }

    pub fn with_combination(mut self, combination: SensorCombination) -> Self {
        self.combination = combination;
        self
    }

    pub fn with_integral_limit(mut self, limit: f64) -> Self {
        self.integral_limit = Some(limit);
        self
    }
}

/// Which side of the target the servo points to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Heading {
    /// Degrees below target
    LeftOfTarget(f64),
    /// Degrees above target
    RightOfTarget(f64),
    AtTarget,
}

/// Snapshot of the servo after one cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub target: f64,
    pub left_mapped: f64,
    pub right_mapped: f64,
    pub input_mapped: f64,
    pub output: f64,
}

impl CycleReport {
    pub fn heading(&self) -> Heading {
        if self.output < self.target {
            Heading::LeftOfTarget(self.target - self.output)
        } else if self.output > self.target {
            Heading::RightOfTarget(self.output - self.target)
        } else {
            Heading::AtTarget
        }
    }
}

/// PID-regulated servo with two TOF sensors
#[derive(Debug, Clone)]
pub struct Servo {
    pid: PidController,
    tof_left: SensorMapper,
    tof_right: SensorMapper,

    angle_min: f64,
    angle_max: f64,
    combination: SensorCombination,

    input_mapped: f64,
    cycles: u64,
}

impl Servo {
    /// Build the controller and both sensors, failing on any invalid range
    pub fn new(config: ServoConfig) -> ServoResult<Self> {
        let mut pid = PidController::new(
            config.target_angle,
            config.angle_min,
            config.angle_max,
            config.kp,
            config.ki,
            config.kd,
        )?;
        if let Some(limit) = config.integral_limit {
            pid = pid.with_integral_limit(limit)?;
        }

        let tof_left = SensorMapper::new(config.input_min, config.input_max)?;
        let tof_right = SensorMapper::new(config.input_min, config.input_max)?;

        tracing::debug!(?config, "servo initialized");

        Ok(Self {
            pid,
            tof_left,
            tof_right,
            angle_min: config.angle_min,
            angle_max: config.angle_max,
            combination: config.combination,
            input_mapped: 0.0,
            cycles: 0,
        })
    }

    /// Map both samples, regulate once, and report the new state
    pub fn cycle(&mut self, raw_left: f64, raw_right: f64) -> CycleReport {
        let left = self.tof_left.map(raw_left, self.angle_min, self.angle_max);
        let right = self.tof_right.map(raw_right, self.angle_min, self.angle_max);

        self.input_mapped = self.combination.combine(self.pid.target(), left, right);
        self.pid.regulate(self.input_mapped);
        self.cycles += 1;

        let report = self.report();
        tracing::debug!(
            cycle = report.cycle,
            raw_left,
            raw_right,
            input = report.input_mapped,
            output = report.output,
            "servo cycle"
        );
        report
    }

    /// Current state, as of the most recent cycle
    pub fn report(&self) -> CycleReport {
        CycleReport {
            cycle: self.cycles,
            target: self.target(),
            left_mapped: self.left_mapped(),
            right_mapped: self.right_mapped(),
            input_mapped: self.input_mapped,
            output: self.output(),
        }
    }

    pub fn target(&self) -> f64 {
        self.pid.target()
    }

    /// Process variable fed to the PID on the most recent cycle
    pub fn input_mapped(&self) -> f64 {
        self.input_mapped
    }

    /// Servo angle, always within `[angle_min, angle_max]` after a cycle
    pub fn output(&self) -> f64 {
        self.pid.output()
    }

    pub fn left_mapped(&self) -> f64 {
        self.tof_left.last_mapped()
    }

    pub fn right_mapped(&self) -> f64 {
        self.tof_right.last_mapped()
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn combination(&self) -> SensorCombination {
        self.combination
    }

    pub fn pid(&self) -> &PidController {
        &self.pid
    }
}
