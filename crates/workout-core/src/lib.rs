// ABOUTME: Core types and constants for the workout tracker
// ABOUTME: Foundation crate with error handling, workout models, and formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! summary calculator. It holds no formulas and performs no I/O; the root
//! crate builds the metrics, formatting, and driver on top of it.
//!
//! ## Modules
//!
//! - **errors**: `WorkoutError` and its stable `ErrorCode`
//! - **constants**: Unit factors and per-workout formula coefficients
//! - **models**: `WorkoutKind`, `WorkoutRecord` and its variants, `InfoMessage`

/// Workout construction errors with stable error codes
pub mod errors;

/// Unit conversion factors and formula coefficients organized by workout kind
pub mod constants;

/// Core data models (workout records, kinds, summary messages)
pub mod models;
