// ABOUTME: Unified error codes and workout construction errors
// ABOUTME: Maps every failure to a stable code, description, and process exit status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

//! # Error Types
//!
//! - `ErrorCode` - stable codes shared by every error in the workspace
//! - `WorkoutError` - failures raised while turning a raw package into a record

mod workout;

pub use workout::WorkoutError;

use serde::Serialize;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Package tag is not one of the supported workout codes
    UnsupportedWorkoutType,
    /// Package argument count does not match the workout's fields
    InvalidArguments,
    /// Configuration value could not be understood
    ConfigInvalid,
    /// Summary could not be serialized
    SerializationError,
    /// Writing the report failed
    IoError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnsupportedWorkoutType => "The workout type is not supported",
            Self::InvalidArguments => "The workout arguments do not match the workout type",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Summary serialization failed",
            Self::IoError => "Writing the report failed",
        }
    }

    /// Get the process exit status for this error (sysexits.h values)
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::UnsupportedWorkoutType => 64,
            Self::InvalidArguments => 65,
            Self::SerializationError => 70,
            Self::IoError => 74,
            Self::ConfigInvalid => 78,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_codes_are_nonzero() {
        for code in [
            ErrorCode::UnsupportedWorkoutType,
            ErrorCode::InvalidArguments,
            ErrorCode::ConfigInvalid,
            ErrorCode::SerializationError,
            ErrorCode::IoError,
        ] {
            assert_ne!(code.exit_code(), 0, "{code:?} must signal failure");
            assert!(!code.description().is_empty());
        }
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::UnsupportedWorkoutType).unwrap();
        assert_eq!(json, "\"UNSUPPORTED_WORKOUT_TYPE\"");
    }
}
