//! # servo_emulator
//!
//! Emulator for a PID controlled servo with two TOF sensors reading the
//! relative angle. Enter a value for the left and the right sensor each
//! cycle; the servo angle is regulated toward the target and the target,
//! mapped input and current angle are printed.
//!
//! Usage:
//!   servo_emulator                              # 90 degree target, 30 - 150 range
//!   servo_emulator --kp 2 --ki 0 --kd 0.5       # Custom gains
//!   servo_emulator --combination difference     # Relative-angle input
//!   printf '0\n1023\n' | servo_emulator --json  # Scripted, JSON output

mod cli;
mod emulator;
mod report;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use emulator::{Emulator, OutputFormat};
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = cli.servo_config();
    let servo = cli.build_servo()?;

    info!(
        target_angle = config.target_angle,
        angle_min = config.angle_min,
        angle_max = config.angle_max,
        combination = ?config.combination,
        "Starting servo emulator"
    );

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut emulator = Emulator::new(servo)
        .with_format(format)
        .with_max_cycles(cli.cycles);

    let cycles = emulator.run(&mut io::stdin().lock(), &mut io::stdout().lock())?;
    info!(
        cycles,
        output = emulator.servo().output(),
        "Servo emulator stopped"
    );

    Ok(())
}
