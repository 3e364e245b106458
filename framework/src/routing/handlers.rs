//! Named handler registry
//!
//! Router manifests reference handlers by name; the application registers
//! the actual functions during bootstrap, before modules are loaded. Same
//! global-registry shape as the route-name registry.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, OnceLock, RwLock};

use super::router::BoxedHandler;
use crate::http::{Request, Response};

static HANDLER_REGISTRY: OnceLock<RwLock<HashMap<String, Arc<BoxedHandler>>>> = OnceLock::new();

/// Register a handler under a manifest-visible name
///
/// Registering the same name twice replaces the earlier handler.
///
/// # Example
///
/// ```rust,ignore
/// // In bootstrap.rs
/// register_handler("users.index", controllers::users::index);
/// ```
pub fn register_handler<H, Fut>(name: &str, handler: H)
where
    H: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    let boxed: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
    let registry = HANDLER_REGISTRY.get_or_init(|| RwLock::new(HashMap::new()));
    if let Ok(mut map) = registry.write() {
        map.insert(name.to_string(), Arc::new(boxed));
    }
}

/// Look up a handler by name
pub fn resolve_handler(name: &str) -> Option<Arc<BoxedHandler>> {
    HANDLER_REGISTRY
        .get()?
        .read()
        .ok()?
        .get(name)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::text;

    #[test]
    fn test_register_and_resolve() {
        register_handler("handlers_test.ping", |_req| async { text("pong") });
        assert!(resolve_handler("handlers_test.ping").is_some());
        assert!(resolve_handler("handlers_test.missing").is_none());
    }
}
