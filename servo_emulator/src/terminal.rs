//! Reading TOF samples typed into the terminal

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::warn;

pub const LEFT_PROMPT: &str = "Enter input for left sensor:";
pub const RIGHT_PROMPT: &str = "Enter input for right sensor:";

/// Prompt until a finite number is entered
///
/// Returns `Ok(None)` once the input is exhausted.
pub fn read_sample<R, W>(prompt: &str, input: &mut R, out: &mut W) -> Result<Option<f64>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut line = String::new();
    loop {
        writeln!(out, "{}", prompt)?;
        out.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read sensor input")?;
        if read == 0 {
            return Ok(None);
        }

        match parse_sample(&line) {
            Some(value) => return Ok(Some(value)),
            None => {
                warn!(input = line.trim(), "Rejected sensor input");
                writeln!(out, "Invalid input, please enter a number!")?;
            }
        }
    }
}

/// Read the left sample, then the right one
pub fn read_pair<R, W>(input: &mut R, out: &mut W) -> Result<Option<(f64, f64)>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let Some(left) = read_sample(LEFT_PROMPT, input, out)? else {
        return Ok(None);
    };
    let Some(right) = read_sample(RIGHT_PROMPT, input, out)? else {
        return Ok(None);
    };
    Ok(Some((left, right)))
}

fn parse_sample(line: &str) -> Option<f64> {
    line.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
