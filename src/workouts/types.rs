//! Workout kinds and errors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Kind of workout a sensor package describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    /// Running, measured in steps
    Running,
    /// Sports walking, measured in steps
    SportsWalking,
    /// Pool swimming, measured in strokes
    Swimming,
}

impl WorkoutKind {
    /// All known kinds, in code lookup order.
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Short sensor code identifying this kind in a package.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label printed in the report.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional parameters a package of this kind carries.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Look up a kind by its sensor code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| WorkoutError::UnknownWorkoutType(s.to_string()))
    }
}

/// Errors raised while turning a sensor package into a workout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Package code is not one of the known workout codes.
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    /// Package carries the wrong number of parameters for its kind.
    #[error("{kind} expects {expected} parameters, got {actual}")]
    ParameterCount {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// A count parameter is not a non-negative whole number.
    #[error("{kind}: invalid {name} value {value}")]
    InvalidParameter {
        kind: WorkoutKind,
        name: &'static str,
        value: f64,
    },
}
