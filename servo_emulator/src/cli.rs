use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use servo_core::{SensorCombination, Servo, ServoConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "servo_emulator")]
#[command(about = "Emulator for a PID controlled servo with two TOF sensors", long_about = None)]
pub struct Cli {
    /// Target servo angle (degrees)
    #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
    pub target: f64,

    /// Minimum servo angle, all the way to the left
    #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
    pub angle_min: f64,

    /// Maximum servo angle, all the way to the right
    #[arg(long, default_value_t = 150.0, allow_negative_numbers = true)]
    pub angle_max: f64,

    /// Minimum raw TOF sensor reading
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub input_min: f64,

    /// Maximum raw TOF sensor reading
    #[arg(long, default_value_t = 1023.0, allow_negative_numbers = true)]
    pub input_max: f64,

    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub kp: f64,

    #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
    pub ki: f64,

    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    pub kd: f64,

    /// How the left and right readings become the regulated input
    #[arg(long, value_enum, default_value_t = Combination::Right)]
    pub combination: Combination,

    /// Clamp the integral to +/- this value (anti-windup, off by default)
    #[arg(long)]
    pub integral_limit: Option<f64>,

    /// Stop after this many cycles (runs until EOF otherwise)
    #[arg(long)]
    pub cycles: Option<u64>,

    /// Print one JSON object per cycle instead of the status block
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Combination {
    /// Right sensor supersedes left
    Right,
    /// Mean of both sensors
    Average,
    /// Target offset by right minus left
    Difference,
}

impl From<Combination> for SensorCombination {
    fn from(combination: Combination) -> Self {
        match combination {
            Combination::Right => SensorCombination::RightSupersedes,
            Combination::Average => SensorCombination::Average,
            Combination::Difference => SensorCombination::Difference,
        }
    }
}

impl Cli {
    pub fn servo_config(&self) -> ServoConfig {
        let config = ServoConfig::new(self.target, self.angle_min, self.angle_max)
            .with_input_range(self.input_min, self.input_max)
            .with_gains(self.kp, self.ki, self.kd)
            .with_combination(self.combination.into());

        match self.integral_limit {
            Some(limit) => config.with_integral_limit(limit),
            None => config,
        }
    }

    /// Build the servo, turning a rejected configuration into a diagnostic
    pub fn build_servo(&self) -> Result<Servo> {
        Servo::new(self.servo_config()).context("Invalid servo configuration")
    }
}
