//! FitTrack - Workout Statistics Calculator
//!
//! Turns fitness tracker sensor packages into workout summaries: distance,
//! mean speed and calories burned for running, sports walking and swimming,
//! printed as one report line per workout.

pub mod app;
pub mod config;
pub mod report;
pub mod workouts;

// Re-export commonly used types
pub use app::{run, sample_packages, RunError};
pub use config::AppConfig;
pub use report::InfoMessage;
pub use workouts::{read_package, SensorPackage, Training, Workout, WorkoutError, WorkoutKind};
