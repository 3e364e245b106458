//! Structured logging setup
//!
//! The subscriber is installed once during
//! [`Application::run`](crate::app::Application::run). `RUST_LOG` wins over
//! the configured default level so a deploy can raise verbosity without
//! touching config.

use crate::config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
