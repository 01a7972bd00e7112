//! Logging setup
//!
//! Installs the global `tracing` subscriber used by the binary. Library code
//! only emits events; it never installs a subscriber itself.

use crate::config::LoggingConfig;
use crate::utils::error::{FreightError, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Build the event filter. `RUST_LOG` takes precedence over the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| FreightError::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Build the subscriber described by `config` without installing it
pub fn build_subscriber(config: &LoggingConfig) -> Result<Box<dyn Subscriber + Send + Sync>> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    if config.json {
        Ok(Box::new(builder.json().finish()))
    } else {
        Ok(Box::new(builder.finish()))
    }
}

/// Initialize the global subscriber
///
/// Returns an error if the level is invalid or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let subscriber = build_subscriber(config)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| FreightError::config(format!("Failed to initialize logging: {}", e)))
}
