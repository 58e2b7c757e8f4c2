// ABOUTME: Intelligence module computing workout metrics from raw records
// ABOUTME: Pure formula set plus the per-kind dispatch that builds summary messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

//! # Intelligence Module
//!
//! Turns a [`WorkoutRecord`](workout_core::models::WorkoutRecord) into distance,
//! mean speed, and calories.
//!
//! - [`formulas`]: pure functions over raw numbers, one set per workout kind
//! - [`metrics`]: the [`WorkoutMetrics`] capability, dispatching by kind

/// Pure per-kind distance, speed, and calorie formulas
pub mod formulas;

/// Metrics capability over workout records
pub mod metrics;

pub use metrics::WorkoutMetrics;
