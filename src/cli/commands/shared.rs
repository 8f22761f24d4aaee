//! Shared components for CLI commands
//!
//! Logging setup and the ingestion progress spinner used by both commands.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Set up structured logging at the requested level
///
/// `RUST_LOG` takes precedence over the CLI verbosity flags when set.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trip_analyzer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Create a spinner for the ingestion pass
///
/// Ingestion is a single sequential scan with no known total, so a steady
/// spinner stands in for a percentage bar.
pub fn create_ingest_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
