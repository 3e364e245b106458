pub mod app;
pub mod config;
pub mod discovery;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod routing;
pub mod server;

pub use app::Application;
pub use config::{AppConfig, Config, Environment, HttpCacheConfig, LogConfig, ServerConfig};
pub use discovery::{Exclusion, FilePattern};
pub use error::{AppError, FrameworkError};
pub use http::{HttpResponse, Request, RequestContext, Response, ResponseExt};
pub use middleware::{HttpCacheMiddleware, Middleware, Next};
pub use routing::{register_handler, route, Router};
pub use server::Server;
