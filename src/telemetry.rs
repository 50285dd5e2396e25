//! Module for telemetry functionality such as logging

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Sets up logging. The log level is taken from the `RUST_LOG` env variable (default is `info`).
/// The logging format (pretty/json) is set by the `LOG_FORMAT` env variable.
/// Logs go to stderr, stdout carries the run summary.
pub fn setup_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let format = std::env::var("LOG_FORMAT").unwrap_or_default();

    let registry = tracing_subscriber::registry().with(env_filter);
    match format.as_str() {
        "json" => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        _ => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }
    debug!(format = %format, "logging initialized");
    Ok(())
}
