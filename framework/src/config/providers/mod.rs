mod app;
mod http_cache;
mod log;
mod server;

pub use app::AppConfig;
pub use http_cache::HttpCacheConfig;
pub use log::LogConfig;
pub use server::ServerConfig;
