// ABOUTME: Step lengths and calorie coefficients for running, sports walking, and swimming
// ABOUTME: Values are fixed; changing any of them changes every reported calorie figure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

//! Workout formula constants
//!
//! Step lengths are in meters per action (step or stroke). Distance in
//! kilometers is `actions * step / METERS_PER_KM`.

/// Step length shared by running and sports walking (meters per step)
pub const LAND_STEP_LENGTH_M: f64 = 0.65;

/// Stroke length for swimming (meters per stroke)
pub const SWIM_STROKE_LENGTH_M: f64 = 1.38;

/// Running calorie coefficients
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Offset subtracted from the scaled speed
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie coefficients
pub mod sports_walking {
    /// Weight coefficient of the base term
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Weight coefficient of the speed-over-height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie coefficients
pub mod swimming {
    /// Offset added to mean speed (km/h)
    pub const SPEED_SHIFT: f64 = 1.1;

    /// Multiplier applied to the shifted speed
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
