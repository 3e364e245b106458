//! Application builder
//!
//! Provides a fluent builder API to configure and run a Brim application.
//!
//! # Example
//!
//! ```rust,ignore
//! use brim::Application;
//!
//! #[tokio::main]
//! async fn main() {
//!     Application::new()
//!         .bootstrap(bootstrap::register)
//!         .routes(routes::register)
//!         .modules("modules")
//!         .run()
//!         .await;
//! }
//! ```

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use clap::{Parser, Subcommand};

use crate::config::{Config, LogConfig};
use crate::discovery::Exclusion;
use crate::logging;
use crate::modules;
use crate::routing::Router;
use crate::server::Server;

/// CLI structure for Brim applications
#[derive(Parser)]
#[command(name = "app")]
#[command(about = "Brim application server and utilities")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default command)
    Serve,
    /// List all registered routes, including discovered module routes
    #[command(name = "routes:list")]
    RoutesList,
}

type BootstrapFn = Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send>;

/// Application builder
///
/// Use this to configure and run your application with a fluent API.
pub struct Application {
    config_fn: Option<Box<dyn FnOnce()>>,
    bootstrap_fn: Option<BootstrapFn>,
    routes_fn: Option<Box<dyn FnOnce() -> Router + Send>>,
    modules_dir: Option<PathBuf>,
    modules_exclude: Exclusion,
}

impl Application {
    /// Create a new application builder
    pub fn new() -> Self {
        Application {
            config_fn: None,
            bootstrap_fn: None,
            routes_fn: None,
            modules_dir: None,
            modules_exclude: Exclusion::None,
        }
    }

    /// Register a configuration function
    ///
    /// Called early during startup, after the framework defaults are
    /// registered, to register or override application configuration.
    pub fn config<F>(mut self, f: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.config_fn = Some(Box::new(f));
        self
    }

    /// Register a bootstrap function
    ///
    /// This async function registers named handlers, global middleware, and
    /// other application components before the router is assembled.
    pub fn bootstrap<F, Fut>(mut self, f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.bootstrap_fn = Some(Box::new(move || Box::pin(f())));
        self
    }

    /// Register a routes function returning the base router
    pub fn routes<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> Router + Send + 'static,
    {
        self.routes_fn = Some(Box::new(f));
        self
    }

    /// Auto-discover router manifests under `dir` at startup
    ///
    /// Every file ending in `.router.json` below the directory is loaded
    /// into the router, on top of any routes from [`Application::routes`].
    pub fn modules(mut self, dir: impl Into<PathBuf>) -> Self {
        self.modules_dir = Some(dir.into());
        self
    }

    /// Skip module directories during discovery
    ///
    /// Tokens match anywhere in the directory path; see
    /// [`Exclusion`](crate::discovery::Exclusion).
    pub fn modules_exclude(mut self, exclude: Exclusion) -> Self {
        self.modules_exclude = exclude;
        self
    }

    /// Run the application
    ///
    /// Parses CLI arguments and executes the appropriate command:
    /// - `serve` (default): run the web server
    /// - `routes:list`: print the assembled route table
    pub async fn run(self) {
        let cli = Cli::parse();

        // Load .env files and framework default configs, then logging.
        Config::init(Path::new("."));
        logging::init(&Config::get::<LogConfig>().unwrap_or_default());

        let Application {
            config_fn,
            bootstrap_fn,
            routes_fn,
            modules_dir,
            modules_exclude,
        } = self;

        if let Some(config_fn) = config_fn {
            config_fn();
        }

        match cli.command {
            None | Some(Commands::Serve) => {
                let router =
                    Self::build_router(bootstrap_fn, routes_fn, modules_dir, modules_exclude)
                        .await;
                Server::from_config(router)
                    .run()
                    .await
                    .expect("Failed to start server");
            }
            Some(Commands::RoutesList) => {
                let router =
                    Self::build_router(bootstrap_fn, routes_fn, modules_dir, modules_exclude)
                        .await;
                for record in router.records() {
                    match &record.handler {
                        Some(handler) => {
                            println!("{:<7} {:<40} -> {}", record.method.as_str(), record.path, handler)
                        }
                        None => println!("{:<7} {}", record.method.as_str(), record.path),
                    }
                }
            }
        }
    }

    async fn build_router(
        bootstrap_fn: Option<BootstrapFn>,
        routes_fn: Option<Box<dyn FnOnce() -> Router + Send>>,
        modules_dir: Option<PathBuf>,
        modules_exclude: Exclusion,
    ) -> Router {
        // Bootstrap first: manifests resolve handlers registered here.
        if let Some(bootstrap_fn) = bootstrap_fn {
            bootstrap_fn().await;
        }

        let mut router = match routes_fn {
            Some(routes_fn) => routes_fn(),
            None => Router::new(),
        };

        if let Some(dir) = modules_dir {
            router = modules::load_into(router, &dir, &modules_exclude)
                .expect("Failed to load router modules");
        }

        router
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
