// ABOUTME: Application error type unifying workout, formatting, configuration, and I/O failures
// ABOUTME: Every variant maps to a stable error code and process exit status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

//! # Unified Error Handling System
//!
//! Domain errors live in `workout-core`; this module wraps them together with
//! the failures of the outer layers so the binary can report one error type
//! and derive its exit status from [`ErrorCode`].

use std::io;

use thiserror::Error;

pub use workout_core::errors::{ErrorCode, WorkoutError};

use crate::config::ConfigError;
use crate::formatters::FormatError;

/// Unified error type for the application
#[derive(Debug, Error)]
pub enum AppError {
    /// A package could not be turned into a workout record
    #[error(transparent)]
    Workout(#[from] WorkoutError),

    /// A summary could not be rendered
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the report failed
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Get the stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Workout(error) => error.code(),
            Self::Format(_) => ErrorCode::SerializationError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Io(_) => ErrorCode::IoError,
        }
    }

    /// Get the process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code().exit_code()
    }

    /// Render the message shown to the user when the run fails
    ///
    /// Leads with the code's description, then the detailed cause.
    #[must_use]
    pub fn report(&self) -> String {
        format!("{}: {self}", self.code().description())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
