//! Interactive servo loop: read both sensors, regulate, report

use anyhow::Result;
use servo_core::Servo;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::report;
use crate::terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Drives a [`Servo`] from line-based input
pub struct Emulator {
    servo: Servo,
    format: OutputFormat,
    max_cycles: Option<u64>,
}

impl Emulator {
    pub fn new(servo: Servo) -> Self {
        Self {
            servo,
            format: OutputFormat::Text,
            max_cycles: None,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<u64>) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    pub fn servo(&self) -> &Servo {
        &self.servo
    }

    /// Run until the input ends or the cycle limit is reached
    ///
    /// Returns the number of completed cycles.
    pub fn run<R, W>(&mut self, input: &mut R, out: &mut W) -> Result<u64>
    where
        R: BufRead + ?Sized,
        W: Write,
    {
        loop {
            if let Some(max) = self.max_cycles {
                if self.servo.cycles() >= max {
                    info!(cycles = max, "Cycle limit reached");
                    break;
                }
            }

            let Some((left, right)) = terminal::read_pair(input, out)? else {
                debug!("Sensor input closed");
                break;
            };

            let status = self.servo.cycle(left, right);
            match self.format {
                OutputFormat::Text => {
                    let sink: &mut dyn Write = &mut *out;
                    report::print_status(&status, Some(sink))?
                }
                OutputFormat::Json => report::write_json(&status, out)?,
            }
            out.flush()?;
        }

        Ok(self.servo.cycles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servo_core::ServoConfig;
    use std::io::Cursor;

    fn emulator() -> Emulator {
        Emulator::new(Servo::new(ServoConfig::default()).unwrap())
    }

    #[test]
    fn test_single_cycle_text() {
        let mut input = Cursor::new("0\n1023\n");
        let mut out = Vec::new();

        let cycles = emulator().run(&mut input, &mut out).unwrap();
        assert_eq!(cycles, 1);

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Enter input for left sensor:\nEnter input for right sensor:\n"));
        assert!(printed.contains("Mapped input angle:\t\t150.0"));
        assert!(printed.contains("Current servo angle:\t\t30.0"));
        assert!(printed.contains("60.0 degrees to the left of target!"));
    }

    #[test]
    fn test_cycle_limit() {
        let mut input = Cursor::new("0\n0\n0\n0\n0\n0\n");
        let mut out = Vec::new();

        let mut emulator = emulator()
            .with_format(OutputFormat::Json)
            .with_max_cycles(Some(2));
        assert_eq!(emulator.run(&mut input, &mut out).unwrap(), 2);

        let printed = String::from_utf8(out).unwrap();
        let reports: Vec<serde_json::Value> = printed
            .lines()
            .filter(|line| line.starts_with('{'))
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1]["cycle"], 2);
        assert_eq!(emulator.servo().cycles(), 2);
    }

    #[test]
    fn test_partial_pair_is_dropped() {
        let mut input = Cursor::new("0\n1023\n500\n");
        let mut out = Vec::new();

        let mut emulator = emulator();
        assert_eq!(emulator.run(&mut input, &mut out).unwrap(), 1);
        assert_eq!(emulator.servo().input_mapped(), 150.0);
    }
}
