//! Application bootstrap
//!
//! Registers global middleware and the named handlers that router manifests
//! under `modules/` refer to. Runs before the router is assembled.

use brim::middleware::register_global_middleware;
use brim::{register_handler, HttpCacheMiddleware};

use crate::controllers;
use crate::middleware::LoggingMiddleware;

pub async fn register() {
    // Global middleware, in execution order.
    register_global_middleware(LoggingMiddleware);
    register_global_middleware(HttpCacheMiddleware::from_config());

    // Handlers referenced by name from router manifests.
    register_handler("health.check", controllers::health::check);
    register_handler("users.index", controllers::users::index);
    register_handler("users.show", controllers::users::show);
    register_handler("users.store", controllers::users::store);
}
