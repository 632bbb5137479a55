//! Sensor package decoding.
//!
//! A package is a workout code plus positional readings from the tracker.
//! Decoding checks the reading count for the code's workout kind before
//! building anything.

use crate::workouts::training::{Running, SportsWalking, Swimming, Workout};
use crate::workouts::types::{WorkoutError, WorkoutKind};
use serde::{Deserialize, Serialize};

/// One raw sensor package: workout code and positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout code, e.g. "RUN"
    pub code: String,
    /// Readings in constructor order
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Decode this package into a workout.
    pub fn read(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.code, &self.data)
    }
}

/// Build a workout from a sensor code and its positional readings.
///
/// Readings are `action, duration, weight` followed by `height` for
/// walking or `length_pool, count_pool` for swimming.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = code.parse::<WorkoutKind>().inspect_err(|_| {
        tracing::warn!("Rejected package with unknown workout code {:?}", code);
    })?;

    if data.len() != kind.arity() {
        tracing::warn!(
            "Rejected {} package: expected {} readings, got {}",
            kind,
            kind.arity(),
            data.len()
        );
        return Err(WorkoutError::ParameterCount {
            kind,
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    tracing::debug!("Decoding {} package: {:?}", kind, data);

    let action = whole_count(kind, "action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(action, duration, weight).into(),
        WorkoutKind::SportsWalking => SportsWalking::new(action, duration, weight, data[3]).into(),
        WorkoutKind::Swimming => Swimming::new(action, duration, weight, data[3], data[4]).into(),
    };

    Ok(workout)
}

/// Convert a count reading (steps or strokes) to an integer.
fn whole_count(kind: WorkoutKind, name: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidParameter { kind, name, value })
    }
}
