//! Sensor Mapper
//!
//! Linear rescaling of raw TOF readings into the servo's angle domain.
//!
//! The input domain is fixed when the mapper is created; the angle domain is
//! passed to every [`SensorMapper::map`] call, since it belongs to the
//! controller that consumes the mapped value.
//!
//! Readings outside the input domain are extrapolated, not rejected. The PID
//! output clamp is what keeps the servo angle in range.
//!
//! # Example
//!
//! ```rust
//! use servo_core::algorithms::sensor_map::SensorMapper;
//!
//! let mut tof = SensorMapper::new(0.0, 1023.0).unwrap();
//!
//! assert_eq!(tof.map(1023.0, 30.0, 150.0), 150.0);
//! assert_eq!(tof.last_mapped(), 150.0);
//! ```

use crate::error::{ConfigError, ServoResult};

/// Linear sensor-to-angle mapper
#[derive(Debug, Clone)]
pub struct SensorMapper {
    input_min: f64,
    input_max: f64,
    last_mapped: f64,
}

impl SensorMapper {
    /// Create new mapper for raw readings in `[input_min, input_max]`
    pub fn new(input_min: f64, input_max: f64) -> ServoResult<Self> {
        // A non-finite span also rejects non-finite bounds
        if !(input_max - input_min).is_finite() || input_min >= input_max {
            return Err(ConfigError::InvalidInputRange {
                min: input_min,
                max: input_max,
            });
        }

        Ok(Self {
            input_min,
            input_max,
            last_mapped: 0.0,
        })
    }

    /// Map a raw reading into `[angle_min, angle_max]`
    ///
    /// Unclamped: a reading past either input bound lands past the matching
    /// angle bound.
    pub fn map(&mut self, raw_value: f64, angle_min: f64, angle_max: f64) -> f64 {
        let ratio = (raw_value - self.input_min) / (self.input_max - self.input_min);
        self.last_mapped = angle_min + ratio * (angle_max - angle_min);
        self.last_mapped
    }

    /// Like [`map`](Self::map), but saturates the reading to the input domain first
    pub fn map_clamped(&mut self, raw_value: f64, angle_min: f64, angle_max: f64) -> f64 {
        let raw_value = raw_value.clamp(self.input_min, self.input_max);
        self.map(raw_value, angle_min, angle_max)
    }

    /// Most recent mapped value (0 before the first read)
    pub fn last_mapped(&self) -> f64 {
        self.last_mapped
    }

    /// Get input domain bounds (min, max)
    pub fn input_range(&self) -> (f64, f64) {
        (self.input_min, self.input_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tof() -> SensorMapper {
        SensorMapper::new(0.0, 1023.0).unwrap()
    }

    #[test]
    fn test_bounds_map_to_angle_bounds() {
        let mut tof = tof();

        assert_eq!(tof.map(0.0, 30.0, 150.0), 30.0);
        assert_eq!(tof.map(1023.0, 30.0, 150.0), 150.0);
    }

    #[test]
    fn test_midpoint() {
        let mut tof = tof();

        assert_relative_eq!(tof.map(511.5, 30.0, 150.0), 90.0);

        let mut symmetric = SensorMapper::new(-100.0, 100.0).unwrap();
        assert_eq!(symmetric.map(0.0, -60.0, 60.0), 0.0);
    }

    #[test]
    fn test_out_of_domain_extrapolates() {
        let mut tof = tof();

        assert_relative_eq!(tof.map(2046.0, 30.0, 150.0), 270.0);
        assert_relative_eq!(tof.map(-1023.0, 30.0, 150.0), -90.0);
    }

    #[test]
    fn test_map_clamped() {
        let mut tof = tof();

        assert_eq!(tof.map_clamped(5000.0, 30.0, 150.0), 150.0);
        assert_eq!(tof.map_clamped(-1.0, 30.0, 150.0), 30.0);
        assert_relative_eq!(tof.map_clamped(511.5, 30.0, 150.0), 90.0);
    }

    #[test]
    fn test_last_mapped_tracks_reads() {
        let mut tof = tof();
        assert_eq!(tof.last_mapped(), 0.0);

        tof.map(1023.0, 30.0, 150.0);
        assert_eq!(tof.last_mapped(), 150.0);

        tof.map(0.0, 30.0, 150.0);
        assert_eq!(tof.last_mapped(), 30.0);
    }

    #[test]
    fn test_inverted_angle_domain() {
        let mut tof = tof();

        // Angle bounds are taken as given
        assert_eq!(tof.map(0.0, 150.0, 30.0), 150.0);
        assert_eq!(tof.map(1023.0, 150.0, 30.0), 30.0);
    }

    #[test]
    fn test_invalid_input_range() {
        assert_eq!(
            SensorMapper::new(1023.0, 0.0).unwrap_err(),
            ConfigError::InvalidInputRange {
                min: 1023.0,
                max: 0.0
            }
        );
        assert!(SensorMapper::new(5.0, 5.0).is_err());
        assert!(SensorMapper::new(f64::NAN, 1.0).is_err());
        assert_eq!(tof().input_range(), (0.0, 1023.0));
    }

    #[test]
    fn test_overflowing_input_range() {
        // Both bounds finite, but max - min overflows to infinity
        assert_eq!(
            SensorMapper::new(-1e308, 1e308).unwrap_err(),
            ConfigError::InvalidInputRange {
                min: -1e308,
                max: 1e308
            }
        );
        assert!(SensorMapper::new(0.0, f64::INFINITY).is_err());

        let mut wide = SensorMapper::new(-1e307, 1e307).unwrap();
        assert!(wide.map(1e307, 30.0, 150.0).is_finite());
    }
}
