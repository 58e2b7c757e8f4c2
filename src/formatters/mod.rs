// ABOUTME: Summary formatting for workout messages as text or JSON lines
// ABOUTME: Renders every metric with exactly three decimals using standard fixed-point formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default, the human-readable summary line
//! - **JSON**: One compact JSON object per summary
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workout_tracker::formatters::{format_message, OutputFormat};
//!
//! let line = format_message(&info, OutputFormat::Text)?;
//! ```

use std::error::Error;
use std::fmt;

use workout_core::models::InfoMessage;

use crate::config::{ConfigError, OUTPUT_FORMAT_ENV};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary line (default)
    #[default]
    Text,
    /// Compact JSON object per line
    Json,
}

impl OutputFormat {
    /// Parse format from a setting value (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for anything but `text` or `json`
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                key: OUTPUT_FORMAT_ENV,
                value: other.to_owned(),
                valid: "text, json",
            }),
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

/// Render the human-readable summary line for a workout
#[must_use]
pub fn summary_line(info: &InfoMessage) -> String {
    format!(
        "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
        info.workout_type,
        info.duration_hours,
        info.distance_km,
        info.mean_speed_kmh,
        info.calories_kcal,
    )
}

/// Render a workout summary in the requested format, without a trailing newline
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_message(info: &InfoMessage, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(summary_line(info)),
        OutputFormat::Json => serde_json::to_string(info).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::parse("TEXT"), Ok(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("json"), Ok(OutputFormat::Json));
        assert!(OutputFormat::parse("toon").is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::default().to_string(), "text");
    }
}
