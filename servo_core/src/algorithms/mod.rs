//! Pure computational building blocks of the servo control loop
//!
//! No I/O: both algorithms are plain numeric state machines that the
//! [`Servo`](crate::Servo) composes once per cycle.
//!
//! - **pid**: step-based PID controller with output clamping
//! - **sensor_map**: linear TOF reading to angle mapping

pub mod pid;
pub mod sensor_map;
