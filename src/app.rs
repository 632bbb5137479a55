//! Report driver.
//!
//! Decodes each sample package, summarises the workout and writes one report
//! line per package in input order.

use crate::config::AppConfig;
use crate::report::ReportError;
use crate::workouts::{SensorPackage, WorkoutError};
use std::io::Write;
use thiserror::Error;

/// Packages recorded by the tracker for the demo run.
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Errors that stop a report run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Workout error: {0}")]
    Workout(#[from] WorkoutError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write a report line for every package.
pub fn run<W: Write>(
    config: &AppConfig,
    packages: &[SensorPackage],
    out: &mut W,
) -> Result<(), RunError> {
    let settings = config.report;

    for package in packages {
        let workout = package.read()?;
        let info = workout.show_training_info();
        tracing::debug!("{} summary: {:?}", workout.kind(), info);
        writeln!(out, "{}", info.format(settings.format, settings.locale)?)?;
    }

    tracing::info!("Reported {} workouts", packages.len());
    Ok(())
}
