//! Status output for each servo cycle

use anyhow::Result;
use servo_core::{CycleReport, Heading};
use std::io::{self, Write};

const RULE: &str =
    "--------------------------------------------------------------------------------";

/// Sentence describing where the servo points relative to its target
pub fn heading_line(heading: Heading) -> String {
    match heading {
        Heading::LeftOfTarget(degrees) => {
            format!("The servo is angled {:.1} degrees to the left of target!", degrees)
        }
        Heading::RightOfTarget(degrees) => {
            format!("The servo is angled {:.1} degrees to the right of target!", degrees)
        }
        Heading::AtTarget => "The servo is angled right at target!".to_string(),
    }
}

/// Write the status block: target, mapped input and servo angle with one decimal
pub fn write_status<W: Write + ?Sized>(report: &CycleReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Target servo angle:\t\t{:.1}", report.target)?;
    writeln!(out, "Mapped input angle:\t\t{:.1}", report.input_mapped)?;
    writeln!(out, "Current servo angle:\t\t{:.1}\n", report.output)?;
    writeln!(out, "{}", heading_line(report.heading()))?;
    writeln!(out, "{}\n", RULE)?;
    Ok(())
}

/// Like [`write_status`], defaulting to stdout when no sink is given
pub fn print_status(report: &CycleReport, sink: Option<&mut dyn Write>) -> io::Result<()> {
    match sink {
        Some(out) => write_status(report, out),
        None => write_status(report, &mut io::stdout().lock()),
    }
}

/// One JSON object per line
pub fn write_json<W: Write + ?Sized>(report: &CycleReport, out: &mut W) -> Result<()> {
    let line = serde_json::to_string(report)?;
    writeln!(out, "{}", line)?;
    Ok(())
}
