// ABOUTME: Errors raised while building a workout record from a raw sensor package
// ABOUTME: Covers unknown workout tags and argument count mismatches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

use thiserror::Error;

use super::ErrorCode;

/// Errors specific to workout record construction.
///
/// Construction is all-or-nothing: when one of these is returned no record
/// exists and nothing else has happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutError {
    /// Package tag is not a known workout code
    #[error("Unsupported workout type '{tag}'. Valid types: {}", .valid_tags.join(", "))]
    UnsupportedWorkoutType {
        /// Tag as received
        tag: String,
        /// Every tag the dispatcher accepts, in canonical order
        valid_tags: Vec<&'static str>,
    },
    /// Package has the wrong number of positional arguments for its tag
    #[error("Invalid arguments for workout type '{tag}': expected {expected}, got {got}")]
    InvalidArguments {
        /// Tag of the workout being built
        tag: String,
        /// Field count of the workout
        expected: usize,
        /// Argument count received
        got: usize,
    },
}

impl WorkoutError {
    /// Create an "unsupported workout type" error
    #[must_use]
    pub fn unsupported_workout_type(
        tag: impl Into<String>,
        valid_tags: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self::UnsupportedWorkoutType {
            tag: tag.into(),
            valid_tags: valid_tags.into_iter().collect(),
        }
    }

    /// Create an "invalid arguments" error
    #[must_use]
    pub fn invalid_arguments(tag: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::InvalidArguments {
            tag: tag.into(),
            expected,
            got,
        }
    }

    /// Get the package tag associated with this error
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::UnsupportedWorkoutType { tag, .. } | Self::InvalidArguments { tag, .. } => tag,
        }
    }

    /// Get the stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedWorkoutType { .. } => ErrorCode::UnsupportedWorkoutType,
            Self::InvalidArguments { .. } => ErrorCode::InvalidArguments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message_names_tag_and_valid_tags() {
        let error = WorkoutError::unsupported_workout_type("FLY", ["SWM", "RUN", "WLK"]);
        assert_eq!(
            error.to_string(),
            "Unsupported workout type 'FLY'. Valid types: SWM, RUN, WLK"
        );
        assert_eq!(error.tag(), "FLY");
        assert_eq!(error.code(), ErrorCode::UnsupportedWorkoutType);
    }

    #[test]
    fn test_invalid_arguments_message() {
        let error = WorkoutError::invalid_arguments("WLK", 4, 2);
        assert_eq!(
            error.to_string(),
            "Invalid arguments for workout type 'WLK': expected 4, got 2"
        );
        assert_eq!(error.code().exit_code(), 65);
    }
}
