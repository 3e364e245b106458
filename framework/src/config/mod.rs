//! Configuration module
//!
//! Provides `.env` file loading with environment-based precedence, typed
//! configuration structs, and a simple facade for accessing them.
//!
//! # Example
//!
//! ```rust,ignore
//! use brim::{Config, ServerConfig};
//!
//! Config::init(std::path::Path::new("."));
//! let server = Config::get::<ServerConfig>().unwrap();
//! println!("listening on port {}", server.port);
//! ```

pub mod env;
pub mod providers;
pub mod repository;

pub use env::{env, load_dotenv, Environment};
pub use providers::{AppConfig, HttpCacheConfig, LogConfig, ServerConfig};

use std::path::Path;

/// Main Config facade for accessing configuration
///
/// Initialized once at startup; typed configs live in a global repository
/// and are cloned out on access.
pub struct Config;

impl Config {
    /// Initialize the configuration system
    ///
    /// Loads environment variables from `.env` files under `project_root`
    /// and registers the framework's default configs. Returns the detected
    /// environment.
    pub fn init(project_root: &Path) -> Environment {
        let env = env::load_dotenv(project_root);

        repository::register(AppConfig::from_env());
        repository::register(ServerConfig::from_env());
        repository::register(HttpCacheConfig::from_env());
        repository::register(LogConfig::from_env());

        env
    }

    /// Get a typed config struct from the repository
    pub fn get<T: std::any::Any + Send + Sync + Clone + 'static>() -> Option<T> {
        repository::get::<T>()
    }

    /// Register a custom config struct
    ///
    /// Use this during bootstrap to register application configs (or to
    /// override a framework default) so they can be retrieved later with
    /// `Config::get::<T>()`.
    pub fn register<T: std::any::Any + Send + Sync + 'static>(config: T) {
        repository::register(config);
    }

    /// Check if a config type is registered
    pub fn has<T: std::any::Any + 'static>() -> bool {
        repository::has::<T>()
    }
}
