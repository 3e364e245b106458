use std::collections::HashMap;
use std::net::SocketAddr;

use serde::de::DeserializeOwned;

use super::body::{collect_body, parse_json};
use super::context::RequestContext;
use super::ParamError;
use crate::error::FrameworkError;

/// HTTP Request wrapper providing convenient access to request data
pub struct Request {
    inner: hyper::Request<hyper::body::Incoming>,
    params: HashMap<String, String>,
    context: RequestContext,
}

impl Request {
    pub fn new(inner: hyper::Request<hyper::body::Incoming>, remote_addr: SocketAddr) -> Self {
        let context = RequestContext::from_parts(inner.headers(), inner.uri(), remote_addr);
        Self {
            inner,
            params: HashMap::new(),
            context,
        }
    }

    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    /// Get the request method
    pub fn method(&self) -> &hyper::Method {
        self.inner.method()
    }

    /// Get the request path
    pub fn path(&self) -> &str {
        self.inner.uri().path()
    }

    /// Get a route parameter by name (e.g. /users/{id})
    ///
    /// Returns Err(ParamError) if the parameter is missing, enabling use of
    /// the `?` operator.
    pub fn param(&self, name: &str) -> Result<&str, ParamError> {
        self.params
            .get(name)
            .map(|s| s.as_str())
            .ok_or_else(|| ParamError {
                param_name: name.to_string(),
            })
    }

    /// Get all route parameters
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Get a header value by name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name).and_then(|v| v.to_str().ok())
    }

    /// Per-request context: base URL, current URL, client IP
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Parse the request body as JSON
    ///
    /// Consumes the request since the body can only be read once.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// #[derive(Deserialize)]
    /// struct CreateUser { name: String }
    ///
    /// pub async fn store(req: Request) -> Response {
    ///     let data: CreateUser = req.json().await?;
    ///     // ...
    /// }
    /// ```
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, FrameworkError> {
        let bytes = collect_body(self.inner.into_body()).await?;
        parse_json(&bytes)
    }
}
