//! Cache-Control middleware
//!
//! Stamps successful responses with a `Cache-Control` header. Error
//! responses pass through untouched so failures are never cached.

use async_trait::async_trait;

use super::{Middleware, Next};
use crate::config::{Config, HttpCacheConfig};
use crate::http::{Request, Response};

pub struct HttpCacheMiddleware {
    header_value: String,
}

impl HttpCacheMiddleware {
    /// Cache middleware with explicit visibility and max-age
    pub fn new(visibility: &str, max_age: u64) -> Self {
        Self {
            header_value: HttpCacheConfig {
                visibility: visibility.to_string(),
                max_age,
            }
            .header_value(),
        }
    }

    /// Cache middleware driven by [`HttpCacheConfig`]
    pub fn from_config() -> Self {
        let config = Config::get::<HttpCacheConfig>().unwrap_or_default();
        Self {
            header_value: config.header_value(),
        }
    }
}

#[async_trait]
impl Middleware for HttpCacheMiddleware {
    async fn handle(&self, request: Request, next: Next<'_>) -> Response {
        next.run(request)
            .await
            .map(|response| response.header("Cache-Control", self.header_value.clone()))
    }
}
