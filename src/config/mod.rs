// ABOUTME: Driver configuration loaded from environment variables with safe defaults
// ABOUTME: Selects the error policy for bad packages and the report output format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

//! Tracker configuration
//!
//! Configuration comes from the environment first, then command-line flags
//! override it in the binary:
//!
//! ```bash
//! export WORKOUT_ERROR_POLICY=skip     # halt (default) | skip
//! export WORKOUT_OUTPUT_FORMAT=json    # text (default) | json
//! ```
//!
//! Neither setting touches the computed figures or the text line layout.

use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::formatters::OutputFormat;

/// Environment variable selecting the error policy
pub const ERROR_POLICY_ENV: &str = "WORKOUT_ERROR_POLICY";

/// Environment variable selecting the output format
pub const OUTPUT_FORMAT_ENV: &str = "WORKOUT_OUTPUT_FORMAT";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Setting has a value outside its accepted set
    #[error("Invalid value '{value}' for {key}. Valid options: {valid}")]
    InvalidValue {
        /// Setting name
        key: &'static str,
        /// Value as received
        value: String,
        /// Accepted values, comma separated
        valid: &'static str,
    },
}

/// What the driver does when a package cannot be turned into a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the batch and surface the error
    #[default]
    Halt,
    /// Log the error, skip the package, and keep going
    Skip,
}

impl ErrorPolicy {
    /// Get the policy name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Halt => "halt",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "halt" => Ok(Self::Halt),
            "skip" => Ok(Self::Skip),
            other => Err(ConfigError::InvalidValue {
                key: ERROR_POLICY_ENV,
                value: other.to_owned(),
                valid: "halt, skip",
            }),
        }
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerConfig {
    /// Policy for packages that fail to dispatch
    pub error_policy: ErrorPolicy,
    /// Report line format
    pub output_format: OutputFormat,
}

impl TrackerConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to an
    /// unrecognized value
    pub fn from_env() -> Result<Self, ConfigError> {
        let error_policy = env::var(ERROR_POLICY_ENV)
            .ok()
            .map(|value| value.parse::<ErrorPolicy>())
            .transpose()?
            .unwrap_or_default();

        let output_format = env::var(OUTPUT_FORMAT_ENV)
            .ok()
            .map(|value| OutputFormat::parse(&value))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            error_policy,
            output_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_policy_parsing() {
        assert_eq!("halt".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Halt));
        assert_eq!(" Skip ".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Skip));
        let err = "retry".parse::<ErrorPolicy>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'retry' for WORKOUT_ERROR_POLICY. Valid options: halt, skip"
        );
    }

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.error_policy, ErrorPolicy::Halt);
        assert_eq!(config.output_format, OutputFormat::Text);
    }
}
