// ABOUTME: Integration tests for the batch driver over sensor packages
// ABOUTME: Checks the sample report, halt and skip error policies, and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_tracker::config::{ErrorPolicy, TrackerConfig};
use workout_tracker::driver::{process_package, run_batch, SAMPLE_PACKAGES};
use workout_tracker::errors::{AppError, ErrorCode, WorkoutError};
use workout_tracker::formatters::OutputFormat;
use workout_tracker::models::InfoMessage;

const SAMPLE_REPORT: &str = "\
Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories: 336.000.
Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories: 699.750.
Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories: 157.500.
";

const RUN_LINE: &str = "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories: 699.750.";

const MIXED_PACKAGES: &[(&str, &[f64])] = &[
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("FLY", &[1.0, 1.0, 1.0]),
    ("WLK", &[9000.0, 1.0]),
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
];

#[test]
fn test_sample_packages_report() {
    let mut out = Vec::new();
    let report = run_batch(
        SAMPLE_PACKAGES.iter().copied(),
        &TrackerConfig::default(),
        &mut out,
    )
    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), SAMPLE_REPORT);
    assert_eq!(report.processed, 3);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_process_single_package() {
    let line = process_package("RUN", &[15000.0, 1.0, 75.0], &TrackerConfig::default()).unwrap();
    assert_eq!(line, RUN_LINE);
}

#[test]
fn test_halt_policy_stops_at_first_error() {
    let mut out = Vec::new();
    let error = run_batch(
        MIXED_PACKAGES.iter().copied(),
        &TrackerConfig::default(),
        &mut out,
    )
    .unwrap_err();

    match &error {
        AppError::Workout(WorkoutError::UnsupportedWorkoutType { tag, .. }) => {
            assert_eq!(tag, "FLY");
        }
        other => panic!("expected unsupported workout type, got {other:?}"),
    }
    assert_eq!(error.exit_code(), 64);
    assert_eq!(String::from_utf8(out).unwrap(), format!("{RUN_LINE}\n"));
}

#[test]
fn test_skip_policy_continues_and_reports() {
    let config = TrackerConfig {
        error_policy: ErrorPolicy::Skip,
        ..TrackerConfig::default()
    };
    let mut out = Vec::new();
    let report = run_batch(MIXED_PACKAGES.iter().copied(), &config, &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], RUN_LINE);
    assert!(lines[1].starts_with("Workout type: Swimming;"));

    assert_eq!(report.processed, 2);
    let codes: Vec<_> = report.skipped.iter().map(WorkoutError::code).collect();
    assert_eq!(
        codes,
        vec![ErrorCode::UnsupportedWorkoutType, ErrorCode::InvalidArguments]
    );
    assert_eq!(report.skipped[1], WorkoutError::invalid_arguments("WLK", 4, 2));
    let tags: Vec<_> = report.skipped.iter().map(WorkoutError::tag).collect();
    assert_eq!(tags, vec!["FLY", "WLK"]);
}

#[test]
fn test_json_output_has_one_object_per_package() {
    let config = TrackerConfig {
        output_format: OutputFormat::Json,
        ..TrackerConfig::default()
    };
    let mut out = Vec::new();
    run_batch(SAMPLE_PACKAGES.iter().copied(), &config, &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    let messages: Vec<InfoMessage> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let labels: Vec<_> = messages.iter().map(|m| m.workout_type.as_str()).collect();
    assert_eq!(labels, vec!["Swimming", "Running", "SportsWalking"]);
    assert!((messages[0].mean_speed_kmh - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_batch_writes_nothing() {
    let mut out = Vec::new();
    let packages: Vec<(&str, &[f64])> = Vec::new();
    let report = run_batch(packages, &TrackerConfig::default(), &mut out).unwrap();
    assert!(out.is_empty());
    assert_eq!(report.processed, 0);
}
