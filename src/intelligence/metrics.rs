// ABOUTME: Workout metrics capability dispatching each record kind to its formulas
// ABOUTME: Builds the summary message (distance, mean speed, calories) for any workout record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

use workout_core::models::{InfoMessage, WorkoutRecord};

use super::formulas;

/// Derived metrics of a workout
///
/// Implemented for [`WorkoutRecord`] with a closed `match` over its kinds:
/// running and sports walking share the default mean speed, swimming
/// overrides it with the pool-lap formula, and each kind has its own calories.
pub trait WorkoutMetrics {
    /// Distance in kilometers
    fn distance_km(&self) -> f64;

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64;

    /// Estimated energy spent in kcal
    fn spent_calories(&self) -> f64;

    /// Build the summary message for this workout
    fn training_info(&self) -> InfoMessage;
}

impl WorkoutMetrics for WorkoutRecord {
    fn distance_km(&self) -> f64 {
        formulas::distance_km(self.action_count(), self.kind().step_length_m())
    }

    fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming(swim) => formulas::swimming_mean_speed_kmh(
                swim.pool_length_m,
                swim.pool_lap_count,
                swim.duration_hours,
            ),
            Self::Running(_) | Self::SportsWalking(_) => {
                formulas::mean_speed_kmh(self.distance_km(), self.duration_hours())
            }
        }
    }

    fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self {
            Self::Running(run) => formulas::running_calories(speed, run.weight_kg, run.duration_hours),
            Self::SportsWalking(walk) => formulas::sports_walking_calories(
                speed,
                walk.weight_kg,
                walk.height_cm,
                walk.duration_hours,
            ),
            Self::Swimming(swim) => formulas::swimming_calories(speed, swim.weight_kg),
        }
    }

    fn training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.kind().label(),
            self.duration_hours(),
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}
