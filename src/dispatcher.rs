// ABOUTME: Dispatcher turning a tagged sensor package into a typed workout record
// ABOUTME: Maps tags to constructors with a plain match and checks positional argument counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

//! Package dispatch
//!
//! A package is a workout tag (`RUN`, `WLK`, `SWM`) plus positional numeric
//! arguments in field order:
//!
//! | Tag | Arguments |
//! |---|---|
//! | `RUN` | actions, duration (h), weight (kg) |
//! | `WLK` | actions, duration (h), weight (kg), height (cm) |
//! | `SWM` | actions, duration (h), weight (kg), pool length (m), pool laps |

use tracing::debug;
use workout_core::errors::WorkoutError;
use workout_core::models::{Running, SportsWalking, Swimming, WorkoutKind, WorkoutRecord};

/// Build a workout record from a package tag and its positional arguments
///
/// # Errors
///
/// Returns `WorkoutError::UnsupportedWorkoutType` if `tag` is not a known
/// workout code, and `WorkoutError::InvalidArguments` if `args` does not hold
/// exactly as many values as the workout has fields.
pub fn read_package(tag: &str, args: &[f64]) -> Result<WorkoutRecord, WorkoutError> {
    let Some(kind) = WorkoutKind::from_tag(tag) else {
        debug!(workout.tag = %tag, "Unsupported workout tag");
        return Err(WorkoutError::unsupported_workout_type(
            tag,
            WorkoutKind::supported_tags(),
        ));
    };

    let record = match (kind, args) {
        (WorkoutKind::Running, &[actions, duration_hours, weight_kg]) => {
            WorkoutRecord::Running(Running {
                action_count: to_count(actions),
                duration_hours,
                weight_kg,
            })
        }
        (WorkoutKind::SportsWalking, &[actions, duration_hours, weight_kg, height_cm]) => {
            WorkoutRecord::SportsWalking(SportsWalking {
                action_count: to_count(actions),
                duration_hours,
                weight_kg,
                height_cm,
            })
        }
        (
            WorkoutKind::Swimming,
            &[actions, duration_hours, weight_kg, pool_length_m, pool_laps],
        ) => WorkoutRecord::Swimming(Swimming {
            action_count: to_count(actions),
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_lap_count: to_lap_count(pool_laps),
        }),
        (kind, _) => {
            debug!(
                workout.tag = %tag,
                workout.expected_args = kind.arity(),
                workout.got_args = args.len(),
                "Workout package has wrong argument count"
            );
            return Err(WorkoutError::invalid_arguments(
                tag,
                kind.arity(),
                args.len(),
            ));
        }
    };

    debug!(workout.tag = %tag, workout.kind = %kind, "Workout package dispatched");
    Ok(record)
}

/// Narrow a raw action count to an integer, dropping the fraction
///
/// The sign and magnitude are kept: counts are converted, not validated.
fn to_count(value: f64) -> i64 {
    value as i64
}

/// Narrow a raw pool lap count, which is never negative, to an unsigned integer
fn to_lap_count(value: f64) -> u32 {
    value as u32
}
