use async_trait::async_trait;
use brim::{Middleware, Next, Request, Response};

/// Logs every handled request with the resolved client address
pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(&self, request: Request, next: Next<'_>) -> Response {
        let method = request.method().clone();
        let path = request.path().to_string();
        let client_ip = request.context().client_ip;

        let response = next.run(request).await;

        let status = if response.is_ok() { "ok" } else { "error" };
        tracing::info!(%method, path, %client_ip, status, "handled request");

        response
    }
}
