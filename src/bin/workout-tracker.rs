// ABOUTME: Workout tracker binary printing a summary line for each sample sensor package
// ABOUTME: Loads configuration, initializes logging, runs the batch, and maps errors to exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors
//!
//! Usage:
//! ```bash
//! # Print the summary of every sample package
//! workout-tracker
//!
//! # Keep going past packages that cannot be dispatched
//! workout-tracker --skip-invalid
//!
//! # Emit JSON lines instead of text
//! workout-tracker --format json
//!
//! # Debug logging on stderr
//! workout-tracker -v
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use workout_tracker::{
    config::{ErrorPolicy, TrackerConfig},
    driver::{run_batch, BatchReport, SAMPLE_PACKAGES},
    errors::AppResult,
    formatters::OutputFormat,
    logging::{self, LoggingConfig},
};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    about = "Workout summary calculator",
    long_about = "Print duration, distance, average speed, and calories for each sample workout package."
)]
struct Cli {
    /// Skip packages that cannot be dispatched instead of stopping
    #[arg(long)]
    skip_invalid: bool,

    /// Report format (text or json), overrides WORKOUT_OUTPUT_FORMAT
    #[arg(long, value_parser = OutputFormat::parse)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose().init()
    } else {
        logging::init_from_env()
    };
    if let Err(e) = logging {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {}", error.report());
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(cli: &Cli) -> AppResult<BatchReport> {
    let mut config = TrackerConfig::from_env()?;
    if cli.skip_invalid {
        config.error_policy = ErrorPolicy::Skip;
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    let mut out = io::stdout().lock();
    run_batch(SAMPLE_PACKAGES.iter().copied(), &config, &mut out)
}
