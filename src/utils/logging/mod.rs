//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` overrides the
//! configured level when it is set.

use crate::config::LoggingConfig;
use crate::utils::error::{CheckError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Fails if a subscriber is already installed or the level does not parse.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| CheckError::internal(format!("Failed to initialize logging: {}", e)))
}

/// Level filter from `RUST_LOG`, falling back to the configured level
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            CheckError::config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}
