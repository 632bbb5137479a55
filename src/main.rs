//! FitTrack - Workout Statistics Calculator
//!
//! Main entry point: prints a report line for each sample package.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting FitTrack v{}", env!("CARGO_PKG_VERSION"));

    let config = fittrack::config::load_config().context("failed to load config")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    fittrack::run(&config, &fittrack::sample_packages(), &mut out)
        .context("failed to report workouts")?;

    Ok(())
}
