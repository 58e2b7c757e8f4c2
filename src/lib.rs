// ABOUTME: Main library entry point for the workout summary calculator
// ABOUTME: Turns raw workout sensor packages into distance, speed, and calorie summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Converts raw workout sensor packages (running, sports walking, swimming)
//! into one summary line each, reporting duration, distance, average speed,
//! and estimated calories.
//!
//! ## Architecture
//!
//! - **Dispatcher**: tag + positional arguments to a typed workout record
//! - **Intelligence**: per-kind distance, speed, and calorie formulas
//! - **Formatters**: fixed three-decimal summary line (or JSON)
//! - **Driver**: batch loop writing one line per package, in order
//! - **Config / Logging**: environment-driven settings and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_tracker::dispatcher::read_package;
//! use workout_tracker::formatters::summary_line;
//! use workout_tracker::intelligence::WorkoutMetrics;
//!
//! let record = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", summary_line(&record.training_info()));
//! # Ok::<(), workout_tracker::errors::WorkoutError>(())
//! ```

/// Driver configuration from environment variables
pub mod config;

/// Package dispatch from workout tag to typed record
pub mod dispatcher;

/// Batch driver over sensor packages
pub mod driver;

/// Unified error handling with stable exit codes
pub mod errors;

/// Summary rendering (text line, JSON)
pub mod formatters;

/// Workout metric formulas and per-kind dispatch
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models re-exported from `workout-core`
pub mod models {
    pub use workout_core::models::*;
}
