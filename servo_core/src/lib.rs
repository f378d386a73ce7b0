//! # Servo Core
//!
//! Closed-loop angular position control for a simulated servo.
//!
//! Two time-of-flight (TOF) distance sensors are read each cycle, their raw
//! values linearly mapped into the servo's angle domain, and the result fed to
//! a PID controller that drives the servo toward a fixed target angle.
//!
//! - **Sensor Mapper**: raw reading to angle, unclamped
//! - **PID Controller**: integral/derivative state with clamped output
//! - **Servo**: owns one PID and two mappers, one regulation per cycle
//!
//! This crate does no I/O. Reading samples and printing status is left to
//! the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use servo_core::{Servo, ServoConfig};
//!
//! // Target 90, angle range 30 - 150, sensors 0 - 1023, Kp 1, Ki 0.01, Kd 0.1
//! let mut servo = Servo::new(ServoConfig::default()).unwrap();
//!
//! let report = servo.cycle(0.0, 1023.0);
//! assert_eq!(report.input_mapped, 150.0);
//! assert_eq!(servo.output(), 30.0);
//! ```

pub mod algorithms;
pub mod error;
pub mod servo;

pub use algorithms::pid::PidController;
pub use algorithms::sensor_map::SensorMapper;
pub use error::{ConfigError, ServoResult};
pub use servo::{CycleReport, Heading, SensorCombination, Servo, ServoConfig};
