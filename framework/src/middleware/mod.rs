//! Middleware pipeline
//!
//! Middleware wraps handler execution: each one receives the request and a
//! [`Next`] that runs the rest of the chain, ending at the route handler.
//! Global middleware is registered during bootstrap and runs on every
//! request, before any route-specific middleware.

mod http_cache;
mod registry;

pub use http_cache::HttpCacheMiddleware;
pub use registry::{register_global_middleware, MiddlewareRegistry};

use std::sync::Arc;

use async_trait::async_trait;

use crate::http::{Request, Response};
use crate::routing::BoxedHandler;

/// A middleware that can inspect or rewrite the request/response
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, request: Request, next: Next<'_>) -> Response;
}

/// Shared, type-erased middleware instance
pub type BoxedMiddleware = Arc<dyn Middleware>;

/// Box a middleware for storage in a registry or route table
pub fn into_boxed<M: Middleware + 'static>(middleware: M) -> BoxedMiddleware {
    Arc::new(middleware)
}

/// The remainder of the middleware chain, ending at the route handler
pub struct Next<'a> {
    chain: &'a [BoxedMiddleware],
    handler: &'a BoxedHandler,
}

impl Next<'_> {
    /// Run the rest of the chain with the given request
    pub async fn run(self, request: Request) -> Response {
        match self.chain.split_first() {
            Some((middleware, rest)) => {
                middleware
                    .handle(
                        request,
                        Next {
                            chain: rest,
                            handler: self.handler,
                        },
                    )
                    .await
            }
            None => (self.handler)(request).await,
        }
    }
}

/// An ordered middleware chain executed around a single handler
pub struct MiddlewareChain {
    middleware: Vec<BoxedMiddleware>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self {
            middleware: Vec::new(),
        }
    }

    /// Append middleware to the end of the chain
    pub fn extend(&mut self, middleware: impl IntoIterator<Item = BoxedMiddleware>) {
        self.middleware.extend(middleware);
    }

    /// Execute the chain, innermost call being the route handler
    pub async fn execute(&self, request: Request, handler: Arc<BoxedHandler>) -> Response {
        Next {
            chain: &self.middleware,
            handler: &handler,
        }
        .run(request)
        .await
    }
}

impl Default for MiddlewareChain {
    fn default() -> Self {
        Self::new()
    }
}
