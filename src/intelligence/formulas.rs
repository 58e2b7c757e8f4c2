// ABOUTME: Pure distance, speed, and calorie formulas for running, sports walking, and swimming
// ABOUTME: Evaluated left to right without fused multiply-add so results are reproducible bit for bit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

//! Workout formula set
//!
//! Every function takes raw inputs and returns a plain `f64`. Nothing here is
//! validated: a zero duration yields an infinite or NaN speed, which then flows
//! through the calorie formulas unchanged.
//!
//! The formulas are written in the exact operation order of the reference
//! figures. Rewriting them with `mul_add` or reassociating terms changes the
//! last bits of the result, so clippy's flop suggestions are disabled here.

#![allow(clippy::suboptimal_flops)]

use workout_core::constants::workout::{running, sports_walking, swimming};
use workout_core::constants::{METERS_PER_KM, MINUTES_PER_HOUR};

/// Distance in kilometers covered by `action_count` steps or strokes
///
/// The count is not bounded: a negative count gives a negative distance.
#[must_use]
pub fn distance_km(action_count: i64, step_length_m: f64) -> f64 {
    action_count as f64 * step_length_m / METERS_PER_KM
}

/// Mean speed in km/h over the whole workout
#[must_use]
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
    distance_km / duration_hours
}

/// Swimming mean speed in km/h, derived from pool laps rather than strokes
#[must_use]
pub fn swimming_mean_speed_kmh(pool_length_m: f64, pool_lap_count: u32, duration_hours: f64) -> f64 {
    pool_length_m * f64::from(pool_lap_count) / METERS_PER_KM / duration_hours
}

/// Running calories:
/// `(18 * speed - 20) * weight / 1000 * duration * 60`
#[must_use]
pub fn running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    (running::SPEED_MULTIPLIER * mean_speed_kmh - running::SPEED_SHIFT) * weight_kg
        / METERS_PER_KM
        * duration_hours
        * MINUTES_PER_HOUR
}

/// Sports walking calories:
/// `(0.035 * weight + floor_div(speed², height) * (0.029 * weight)) * duration * 60`
///
/// The speed-over-height factor is floor-divided on purpose; it acts as an
/// integer coefficient, not a physical ratio.
#[must_use]
pub fn sports_walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_hours: f64,
) -> f64 {
    let speed_height_factor = floor_div(mean_speed_kmh.powi(2), height_cm);
    (sports_walking::WEIGHT_MULTIPLIER * weight_kg
        + speed_height_factor * (sports_walking::SPEED_HEIGHT_MULTIPLIER * weight_kg))
        * duration_hours
        * MINUTES_PER_HOUR
}

/// Swimming calories: `(speed + 1.1) * 2 * weight`
#[must_use]
pub fn swimming_calories(mean_speed_kmh: f64, weight_kg: f64) -> f64 {
    (mean_speed_kmh + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * weight_kg
}

/// Floating point floor division, rounding the quotient toward negative infinity
///
/// Built on the remainder (`fmod`) rather than `(a / b).floor()`: the plain
/// quotient can round up to the next integer before flooring, the remainder
/// form cannot.
#[must_use]
pub fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return 0.0_f64.copysign(dividend / divisor);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
