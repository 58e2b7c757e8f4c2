// ABOUTME: Core data models for workout records and their derived summaries
// ABOUTME: Re-exports workout kinds, per-kind records, and the summary message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

/// Summary message derived from a workout record
pub mod info_message;

/// Workout kinds and raw per-kind records
pub mod workout;

pub use info_message::InfoMessage;
pub use workout::{Running, SportsWalking, Swimming, WorkoutKind, WorkoutRecord};
