// ABOUTME: Workout kind enumeration and raw workout records read from sensor packages
// ABOUTME: Defines package tags, display labels, field counts, and step lengths per kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Workout Tracker Contributors

use std::fmt;

use crate::constants::workout::{LAND_STEP_LENGTH_M, SWIM_STROKE_LENGTH_M};

/// Enumeration of supported workout kinds
///
/// The set is closed: every kind has its own input shape and formulas, and
/// the tag of a sensor package selects exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    /// Running, tag `RUN`
    Running,
    /// Sports walking, tag `WLK`
    SportsWalking,
    /// Pool swimming, tag `SWM`
    Swimming,
}

impl WorkoutKind {
    /// Every supported kind, in canonical tag order
    pub const SUPPORTED: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Look up a kind by its package tag (exact, case-sensitive)
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "RUN" => Some(Self::Running),
            "WLK" => Some(Self::SportsWalking),
            "SWM" => Some(Self::Swimming),
            _ => None,
        }
    }

    /// Get the package tag for this kind
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Get the label shown in summaries
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional arguments a package of this kind carries
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }

    /// Meters covered per action (step or stroke)
    #[must_use]
    pub const fn step_length_m(&self) -> f64 {
        match self {
            Self::Running | Self::SportsWalking => LAND_STEP_LENGTH_M,
            Self::Swimming => SWIM_STROKE_LENGTH_M,
        }
    }

    /// Tags of every supported kind, in canonical order
    pub fn supported_tags() -> impl Iterator<Item = &'static str> {
        Self::SUPPORTED.into_iter().map(|kind| kind.tag())
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw running readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    /// Steps taken
    pub action_count: i64,
    /// Duration in hours, used as a divisor
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

/// Raw sports walking readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    /// Steps taken
    pub action_count: i64,
    /// Duration in hours, used as a divisor
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Athlete height in centimeters
    pub height_cm: f64,
}

/// Raw pool swimming readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    /// Strokes taken
    pub action_count: i64,
    /// Duration in hours, used as a divisor
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Completed pool laps
    pub pool_lap_count: u32,
}

/// A workout record built from one sensor package
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutRecord {
    /// Running workout
    Running(Running),
    /// Sports walking workout
    SportsWalking(SportsWalking),
    /// Pool swimming workout
    Swimming(Swimming),
}

impl WorkoutRecord {
    /// Get the kind of this record
    #[must_use]
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::SportsWalking(_) => WorkoutKind::SportsWalking,
            Self::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    /// Steps or strokes recorded
    #[must_use]
    pub const fn action_count(&self) -> i64 {
        match self {
            Self::Running(r) => r.action_count,
            Self::SportsWalking(w) => w.action_count,
            Self::Swimming(s) => s.action_count,
        }
    }

    /// Duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        match self {
            Self::Running(r) => r.duration_hours,
            Self::SportsWalking(w) => w.duration_hours,
            Self::Swimming(s) => s.duration_hours,
        }
    }

    /// Athlete weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        match self {
            Self::Running(r) => r.weight_kg,
            Self::SportsWalking(w) => w.weight_kg,
            Self::Swimming(s) => s.weight_kg,
        }
    }
}
