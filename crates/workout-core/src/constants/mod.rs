// ABOUTME: Constants module with unit factors and per-workout formula coefficients
// ABOUTME: Keeps every magic number of the calorie formulas behind a name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

//! Constants module
//!
//! Constants are grouped by domain: unit conversion factors in [`units`],
//! and the coefficients of each workout's formulas in [`workout`].

/// Unit conversion factors
pub mod units;

/// Per-workout step lengths and calorie coefficients
pub mod workout;

pub use units::*;
