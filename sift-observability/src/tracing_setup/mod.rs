//! Tracing setup: structured logging and event types.

pub mod events;

use sift_core::constants::LOG_ENV_VAR;
use sift_core::errors::{SiftError, SiftResult};
use tracing_subscriber::EnvFilter;

/// Install the global JSON subscriber, filtered by `SIFT_LOG`.
///
/// Defaults to `info` when the variable is unset. An unparsable filter or a
/// second installation is a `ConfigError`, never a panic.
pub fn init_tracing() -> SiftResult<()> {
    let filter = match std::env::var(LOG_ENV_VAR) {
        Ok(raw) => parse_filter(&raw)?,
        Err(_) => EnvFilter::new("info"),
    };
    install(filter)
}

/// Install the global JSON subscriber with an explicit filter string.
pub fn try_init_tracing_with_filter(filter: &str) -> SiftResult<()> {
    install(parse_filter(filter)?)
}

fn parse_filter(raw: &str) -> SiftResult<EnvFilter> {
    EnvFilter::try_new(raw).map_err(|e| SiftError::ConfigError(format!("{LOG_ENV_VAR} filter: {e}")))
}

fn install(filter: EnvFilter) -> SiftResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .map_err(|e| SiftError::ConfigError(format!("tracing already initialized: {e}")))
}
