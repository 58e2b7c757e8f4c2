// ABOUTME: Unit conversion constants for distance and time
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;
