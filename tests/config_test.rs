// ABOUTME: Integration tests for environment-driven tracker configuration
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use workout_tracker::config::{
    ConfigError, ErrorPolicy, TrackerConfig, ERROR_POLICY_ENV, OUTPUT_FORMAT_ENV,
};
use workout_tracker::errors::{AppError, ErrorCode};
use workout_tracker::formatters::OutputFormat;

fn clear_env() {
    env::remove_var(ERROR_POLICY_ENV);
    env::remove_var(OUTPUT_FORMAT_ENV);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = TrackerConfig::from_env().unwrap();
    assert_eq!(config, TrackerConfig::default());
    assert_eq!(config.error_policy, ErrorPolicy::Halt);
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
#[serial]
fn test_from_env_reads_settings() {
    clear_env();
    env::set_var(ERROR_POLICY_ENV, "skip");
    env::set_var(OUTPUT_FORMAT_ENV, "JSON");

    let config = TrackerConfig::from_env().unwrap();
    assert_eq!(config.error_policy, ErrorPolicy::Skip);
    assert_eq!(config.output_format, OutputFormat::Json);
    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_unknown_policy() {
    clear_env();
    env::set_var(ERROR_POLICY_ENV, "retry");

    let error = TrackerConfig::from_env().unwrap_err();
    assert_eq!(
        error,
        ConfigError::InvalidValue {
            key: ERROR_POLICY_ENV,
            value: "retry".to_owned(),
            valid: "halt, skip",
        }
    );
    let app_error = AppError::from(error);
    assert_eq!(app_error.code(), ErrorCode::ConfigInvalid);
    assert_eq!(app_error.exit_code(), 78);
    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_unknown_format() {
    clear_env();
    env::set_var(OUTPUT_FORMAT_ENV, "yaml");

    let error = TrackerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains(OUTPUT_FORMAT_ENV));
    assert!(error.to_string().contains("text, json"));
    clear_env();
}
