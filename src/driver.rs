// ABOUTME: Batch driver running sensor packages through dispatch, metrics, and formatting
// ABOUTME: Writes one summary line per package in input order and applies the error policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

use std::io::Write;

use tracing::{error, info, warn};
use workout_core::errors::WorkoutError;

use crate::config::{ErrorPolicy, TrackerConfig};
use crate::dispatcher::read_package;
use crate::errors::AppResult;
use crate::formatters::format_message;
use crate::intelligence::WorkoutMetrics;

/// Sensor packages processed by the `workout-tracker` binary
pub const SAMPLE_PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Outcome of a batch run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Packages that produced a summary line
    pub processed: usize,
    /// Packages skipped under `ErrorPolicy::Skip`, in input order
    pub skipped: Vec<WorkoutError>,
}

/// Dispatch one package and render its summary without a trailing newline
///
/// # Errors
///
/// Returns an error if the package cannot be dispatched or the summary
/// cannot be rendered
pub fn process_package(tag: &str, args: &[f64], config: &TrackerConfig) -> AppResult<String> {
    let record = read_package(tag, args)?;
    Ok(format_message(&record.training_info(), config.output_format)?)
}

/// Run every package in order, writing one line per processed package to `out`
///
/// Under `ErrorPolicy::Halt` the first dispatch error ends the batch; lines
/// already written stay written. Under `ErrorPolicy::Skip` dispatch errors
/// are logged and collected in the returned report.
///
/// # Errors
///
/// Returns an error on a dispatch failure under `ErrorPolicy::Halt`, and on
/// any formatting or write failure
pub fn run_batch<'a, I, W>(packages: I, config: &TrackerConfig, out: &mut W) -> AppResult<BatchReport>
where
    I: IntoIterator<Item = (&'a str, &'a [f64])>,
    W: Write,
{
    info!(
        batch.error_policy = %config.error_policy,
        batch.output_format = %config.output_format,
        "Workout batch starting"
    );

    let mut report = BatchReport::default();
    for (index, (tag, args)) in packages.into_iter().enumerate() {
        let record = match read_package(tag, args) {
            Ok(record) => record,
            Err(err) => match config.error_policy {
                ErrorPolicy::Halt => {
                    error!(
                        package.index = index,
                        package.tag = %err.tag(),
                        error.code = ?err.code(),
                        error = %err,
                        "Halting workout batch"
                    );
                    return Err(err.into());
                }
                ErrorPolicy::Skip => {
                    warn!(
                        package.index = index,
                        package.tag = %err.tag(),
                        error.code = ?err.code(),
                        error = %err,
                        "Skipping workout package"
                    );
                    report.skipped.push(err);
                    continue;
                }
            },
        };

        let line = format_message(&record.training_info(), config.output_format)?;
        writeln!(out, "{line}")?;
        report.processed += 1;
    }
    out.flush()?;

    info!(
        batch.processed = report.processed,
        batch.skipped = report.skipped.len(),
        "Workout batch finished"
    );
    Ok(report)
}
