use crate::config::env::env;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default log level directive when RUST_LOG is not set
    pub level: String,
}

impl LogConfig {
    /// Build config from environment variables
    pub fn from_env() -> Self {
        Self {
            level: env("LOG_LEVEL", "info".to_string()),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
