//! Workout module: kinds, training formulas and sensor package decoding.

pub mod package;
pub mod training;
pub mod types;

pub use package::{read_package, SensorPackage};
pub use training::{Running, SportsWalking, Swimming, Training, Workout};
pub use types::{WorkoutError, WorkoutKind};
