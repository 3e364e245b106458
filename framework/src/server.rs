use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::config::{Config, ServerConfig};
use crate::http::{HttpResponse, Request};
use crate::middleware::{Middleware, MiddlewareChain, MiddlewareRegistry};
use crate::routing::Router;

pub struct Server {
    router: Arc<Router>,
    middleware: MiddlewareRegistry,
    host: String,
    port: u16,
}

impl Server {
    pub fn new(router: impl Into<Router>) -> Self {
        Self {
            router: Arc::new(router.into()),
            middleware: MiddlewareRegistry::new(),
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }

    /// Server configured from [`ServerConfig`] and the global middleware
    /// registered during bootstrap
    pub fn from_config(router: impl Into<Router>) -> Self {
        let config = Config::get::<ServerConfig>().unwrap_or_default();
        Self {
            router: Arc::new(router.into()),
            middleware: MiddlewareRegistry::from_global(),
            host: config.host,
            port: config.port,
        }
    }

    /// Add global middleware (runs on every request)
    ///
    /// For route-specific middleware, use `.middleware(M)` on the route
    /// itself.
    pub fn middleware<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.middleware = self.middleware.append(middleware);
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    fn get_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.parse().expect("invalid server host address"),
            self.port,
        )
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.get_addr();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("server running on http://{}", addr);

        let router = self.router;
        let middleware = Arc::new(self.middleware);

        loop {
            let (stream, remote_addr) = listener.accept().await?;
            let io = TokioIo::new(stream);
            let router = router.clone();
            let middleware = middleware.clone();

            tokio::spawn(async move {
                let service = service_fn(move |req: hyper::Request<hyper::body::Incoming>| {
                    let router = router.clone();
                    let middleware = middleware.clone();
                    async move {
                        Ok::<_, Infallible>(
                            handle_request(router, middleware, remote_addr, req).await,
                        )
                    }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    tracing::warn!(error = ?err, "error serving connection");
                }
            });
        }
    }
}

async fn handle_request(
    router: Arc<Router>,
    middleware_registry: Arc<MiddlewareRegistry>,
    remote_addr: SocketAddr,
    req: hyper::Request<hyper::body::Incoming>,
) -> hyper::Response<Full<Bytes>> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match router.match_route(&method, &path) {
        Some((handler, params)) => {
            let request = Request::new(req, remote_addr).with_params(params);

            let mut chain = MiddlewareChain::new();
            chain.extend(middleware_registry.global_middleware().iter().cloned());
            chain.extend(router.get_route_middleware(&path));

            let response = chain.execute(request, handler).await;

            // Both arms carry a renderable response; errors were already
            // shaped into the JSON envelope on conversion.
            response.unwrap_or_else(|e| e).into_hyper()
        }
        None => {
            // The path may exist under other methods; answer 405 with the
            // allowed list, otherwise a plain 404.
            let allowed = router.allowed_methods(&path);
            if allowed.is_empty() {
                HttpResponse::not_found().into_hyper()
            } else {
                HttpResponse::method_not_allowed(&allowed).into_hyper()
            }
        }
    }
}
