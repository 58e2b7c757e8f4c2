// ABOUTME: Summary message derived once from a workout record
// ABOUTME: Carries the label and the four computed metrics consumed by the formatter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

use serde::{Deserialize, Serialize};

/// Computed workout summary, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Display label of the workout kind
    pub workout_type: String,
    /// Duration in hours
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Estimated energy spent in kcal
    pub calories_kcal: f64,
}

impl InfoMessage {
    /// Create a summary message
    #[must_use]
    pub fn new(
        workout_type: impl Into<String>,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            workout_type: workout_type.into(),
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }
}
