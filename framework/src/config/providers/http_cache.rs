use crate::config::env::env;

/// HTTP cache header configuration
///
/// Drives the `Cache-Control` header applied by
/// [`HttpCacheMiddleware`](crate::middleware::HttpCacheMiddleware).
#[derive(Debug, Clone)]
pub struct HttpCacheConfig {
    /// Cache visibility: `public` or `private`
    pub visibility: String,
    /// max-age directive in seconds
    pub max_age: u64,
}

impl HttpCacheConfig {
    /// Build config from environment variables
    pub fn from_env() -> Self {
        Self {
            visibility: env("HTTP_CACHE_VISIBILITY", "public".to_string()),
            max_age: env("HTTP_CACHE_MAX_AGE", 86400),
        }
    }

    /// Render the `Cache-Control` header value
    pub fn header_value(&self) -> String {
        format!("{}, max-age={}", self.visibility, self.max_age)
    }
}

impl Default for HttpCacheConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value() {
        let config = HttpCacheConfig {
            visibility: "public".to_string(),
            max_age: 3600,
        };
        assert_eq!(config.header_value(), "public, max-age=3600");
    }
}
