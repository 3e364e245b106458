use bytes::Bytes;
use http_body_util::Full;

use crate::config::{AppConfig, Config};

/// HTTP Response builder
#[derive(Debug)]
pub struct HttpResponse {
    status: u16,
    body: String,
    headers: Vec<(String, String)>,
}

/// Response type alias - allows using the `?` operator for early returns
pub type Response = Result<HttpResponse, HttpResponse>;

impl HttpResponse {
    pub fn new() -> Self {
        Self {
            status: 200,
            body: String::new(),
            headers: Vec::new(),
        }
    }

    /// Create a response with a string body
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            headers: vec![("Content-Type".to_string(), "text/plain".to_string())],
        }
    }

    /// Create a JSON response from a serde_json::Value
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    /// Set the HTTP status code
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Add a header to the response
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Wrap this response in Ok() for use as Response type
    pub fn ok(self) -> Response {
        Ok(self)
    }

    /// The framework's 404 body
    pub fn not_found() -> Self {
        Self::json(error_envelope(404, "Not Found")).status(404)
    }

    /// The framework's 405 body, naming the methods the path does accept
    pub fn method_not_allowed(methods: &[&str]) -> Self {
        let message = format!(
            "Method Not Allowed, method must be one of: {}",
            methods.join(", ")
        );
        Self::json(error_envelope(405, &message)).status(405)
    }

    /// Convert to hyper response
    pub fn into_hyper(self) -> hyper::Response<Full<Bytes>> {
        let mut builder = hyper::Response::builder().status(self.status);

        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }

        builder.body(Full::new(Bytes::from(self.body))).unwrap()
    }

    #[cfg(test)]
    pub(crate) fn body_str(&self) -> &str {
        &self.body
    }

    #[cfg(test)]
    pub(crate) fn status_code(&self) -> u16 {
        self.status
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension trait so status/header chaining also works on `Response`
pub trait ResponseExt {
    fn status(self, code: u16) -> Self;
    fn header(self, name: impl Into<String>, value: impl Into<String>) -> Self;
}

impl ResponseExt for Response {
    fn status(self, code: u16) -> Self {
        self.map(|r| r.status(code))
    }

    fn header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.map(|r| r.header(name, value))
    }
}

/// The uniform JSON error body: status, stringified code, message
fn error_envelope(code: u16, message: &str) -> serde_json::Value {
    serde_json::json!({
        "status": "error",
        "code": code.to_string(),
        "message": message,
    })
}

/// Auto-convert FrameworkError to HttpResponse
///
/// This enables using the `?` operator in handlers to propagate framework
/// errors as the JSON error envelope. Server-side failures are logged here
/// and, outside debug mode, rendered with an opaque message so internals
/// never leak into responses.
impl From<crate::error::FrameworkError> for HttpResponse {
    fn from(err: crate::error::FrameworkError) -> HttpResponse {
        let status = err.status_code();

        if status >= 500 {
            tracing::error!(error = %err, "request failed");
            let debug = Config::get::<AppConfig>()
                .map(|c| c.debug)
                .unwrap_or(false);
            let body = if debug {
                error_envelope(status, &err.to_string())
            } else {
                error_envelope(status, "Something went wrong!")
            };
            return HttpResponse::json(body).status(status);
        }

        HttpResponse::json(error_envelope(status, &err.to_string())).status(status)
    }
}

/// Auto-convert AppError to HttpResponse
impl From<crate::error::AppError> for HttpResponse {
    fn from(err: crate::error::AppError) -> HttpResponse {
        let framework_err: crate::error::FrameworkError = err.into();
        framework_err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, FrameworkError};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn body_json(response: &HttpResponse) -> serde_json::Value {
        serde_json::from_str(response.body_str()).unwrap()
    }

    #[test]
    fn test_not_found_envelope() {
        let response = HttpResponse::not_found();
        assert_eq!(response.status_code(), 404);
        assert_eq!(
            body_json(&response),
            json!({"status": "error", "code": "404", "message": "Not Found"})
        );
    }

    #[test]
    fn test_method_not_allowed_lists_methods() {
        let response = HttpResponse::method_not_allowed(&["GET", "POST"]);
        assert_eq!(response.status_code(), 405);
        assert_eq!(
            body_json(&response),
            json!({
                "status": "error",
                "code": "405",
                "message": "Method Not Allowed, method must be one of: GET, POST"
            })
        );
    }

    #[test]
    fn test_domain_error_keeps_its_message() {
        let response: HttpResponse = AppError::not_found("user 9 not found").into();
        assert_eq!(response.status_code(), 404);
        assert_eq!(
            body_json(&response),
            json!({"status": "error", "code": "404", "message": "user 9 not found"})
        );
    }

    #[test]
    fn test_response_ext_chains_through_result() {
        let response: Response = Ok(HttpResponse::text("created"))
            .status(201)
            .header("Location", "/users/3");
        assert_eq!(response.unwrap().status_code(), 201);

        // The error side passes through unchanged.
        let response: Response = Err(HttpResponse::not_found()).status(201);
        assert_eq!(response.unwrap_err().status_code(), 404);
    }

    #[test]
    fn test_internal_error_is_opaque_without_debug() {
        // No AppConfig registered in this test process path means debug is
        // treated as off.
        if crate::config::Config::has::<crate::config::AppConfig>() {
            return;
        }
        let response: HttpResponse = FrameworkError::internal("db exploded").into();
        assert_eq!(response.status_code(), 500);
        assert_eq!(
            body_json(&response),
            json!({"status": "error", "code": "500", "message": "Something went wrong!"})
        );
    }
}
