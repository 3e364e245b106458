use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, OnceLock, RwLock};

use matchit::Router as MatchitRouter;

use crate::http::{Request, Response};
use crate::middleware::{into_boxed, BoxedMiddleware, Middleware};

/// Global registry mapping route names to path patterns
static ROUTE_REGISTRY: OnceLock<RwLock<HashMap<String, String>>> = OnceLock::new();

/// Register a route name -> path mapping
pub fn register_route_name(name: &str, path: &str) {
    let registry = ROUTE_REGISTRY.get_or_init(|| RwLock::new(HashMap::new()));
    if let Ok(mut map) = registry.write() {
        map.insert(name.to_string(), path.to_string());
    }
}

/// Generate a URL for a named route with parameters
///
/// Returns `None` if the route name is not registered.
///
/// # Example
/// ```rust,ignore
/// let url = route("users.show", &[("id", "123")]);
/// assert_eq!(url, Some("/users/123".to_string()));
/// ```
pub fn route(name: &str, params: &[(&str, &str)]) -> Option<String> {
    let registry = ROUTE_REGISTRY.get()?.read().ok()?;
    let path_pattern = registry.get(name)?;

    let mut url = path_pattern.clone();
    for (key, value) in params {
        url = url.replace(&format!("{{{}}}", key), value);
    }
    Some(url)
}

/// HTTP methods the router dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RouteMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Parse a method token as found in router manifests
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Type alias for route handlers
pub type BoxedHandler =
    Box<dyn Fn(Request) -> Pin<Box<dyn Future<Output = Response> + Send>> + Send + Sync>;

/// A registered route, kept for listing and diagnostics
#[derive(Debug, Clone)]
pub struct RouteRecord {
    pub method: RouteMethod,
    pub path: String,
    /// Handler name when the route came from a router manifest
    pub handler: Option<String>,
}

/// HTTP router with per-method matchit tables
pub struct Router {
    get_routes: MatchitRouter<Arc<BoxedHandler>>,
    post_routes: MatchitRouter<Arc<BoxedHandler>>,
    put_routes: MatchitRouter<Arc<BoxedHandler>>,
    delete_routes: MatchitRouter<Arc<BoxedHandler>>,
    /// Middleware assignments: path -> boxed middleware instances
    route_middleware: HashMap<String, Vec<BoxedMiddleware>>,
    records: Vec<RouteRecord>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            get_routes: MatchitRouter::new(),
            post_routes: MatchitRouter::new(),
            put_routes: MatchitRouter::new(),
            delete_routes: MatchitRouter::new(),
            route_middleware: HashMap::new(),
            records: Vec::new(),
        }
    }

    /// Get middleware for a specific route path
    pub fn get_route_middleware(&self, path: &str) -> Vec<BoxedMiddleware> {
        self.route_middleware.get(path).cloned().unwrap_or_default()
    }

    /// Register middleware for a path (internal use)
    pub(crate) fn add_middleware(&mut self, path: &str, middleware: BoxedMiddleware) {
        self.route_middleware
            .entry(path.to_string())
            .or_default()
            .push(middleware);
    }

    /// Insert a pre-boxed handler (used by the manifest loader)
    pub(crate) fn insert(
        &mut self,
        method: RouteMethod,
        path: &str,
        handler: Arc<BoxedHandler>,
        handler_name: Option<String>,
    ) {
        let table = match method {
            RouteMethod::Get => &mut self.get_routes,
            RouteMethod::Post => &mut self.post_routes,
            RouteMethod::Put => &mut self.put_routes,
            RouteMethod::Delete => &mut self.delete_routes,
        };
        table.insert(path, handler).ok();
        self.records.push(RouteRecord {
            method,
            path: path.to_string(),
            handler: handler_name,
        });
    }

    /// Register a GET route
    pub fn get<H, Fut>(mut self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.insert(RouteMethod::Get, path, Arc::new(handler), None);
        RouteBuilder {
            router: self,
            last_path: path.to_string(),
        }
    }

    /// Register a POST route
    pub fn post<H, Fut>(mut self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.insert(RouteMethod::Post, path, Arc::new(handler), None);
        RouteBuilder {
            router: self,
            last_path: path.to_string(),
        }
    }

    /// Register a PUT route
    pub fn put<H, Fut>(mut self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.insert(RouteMethod::Put, path, Arc::new(handler), None);
        RouteBuilder {
            router: self,
            last_path: path.to_string(),
        }
    }

    /// Register a DELETE route
    pub fn delete<H, Fut>(mut self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.insert(RouteMethod::Delete, path, Arc::new(handler), None);
        RouteBuilder {
            router: self,
            last_path: path.to_string(),
        }
    }

    /// Match a request and return the handler with extracted params
    pub fn match_route(
        &self,
        method: &hyper::Method,
        path: &str,
    ) -> Option<(Arc<BoxedHandler>, HashMap<String, String>)> {
        let table = match *method {
            hyper::Method::GET => &self.get_routes,
            hyper::Method::POST => &self.post_routes,
            hyper::Method::PUT => &self.put_routes,
            hyper::Method::DELETE => &self.delete_routes,
            _ => return None,
        };

        table.at(path).ok().map(|matched| {
            let params: HashMap<String, String> = matched
                .params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            (matched.value.clone(), params)
        })
    }

    /// Methods under which `path` would match, backing the 405 response
    pub fn allowed_methods(&self, path: &str) -> Vec<&'static str> {
        let tables: [(RouteMethod, &MatchitRouter<Arc<BoxedHandler>>); 4] = [
            (RouteMethod::Get, &self.get_routes),
            (RouteMethod::Post, &self.post_routes),
            (RouteMethod::Put, &self.put_routes),
            (RouteMethod::Delete, &self.delete_routes),
        ];
        tables
            .into_iter()
            .filter(|(_, table)| table.at(path).is_ok())
            .map(|(method, _)| method.as_str())
            .collect()
    }

    /// Every registered route, in registration order
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder returned after registering a route, enabling .name() chaining
pub struct RouteBuilder {
    pub(crate) router: Router,
    last_path: String,
}

impl RouteBuilder {
    /// Name the most recently registered route
    pub fn name(self, name: &str) -> Router {
        register_route_name(name, &self.last_path);
        self.router
    }

    /// Apply middleware to the most recently registered route
    pub fn middleware<M: Middleware + 'static>(mut self, middleware: M) -> RouteBuilder {
        self.router
            .add_middleware(&self.last_path, into_boxed(middleware));
        self
    }

    /// Register a GET route (for chaining without .name())
    pub fn get<H, Fut>(self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.router.get(path, handler)
    }

    /// Register a POST route (for chaining without .name())
    pub fn post<H, Fut>(self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.router.post(path, handler)
    }

    /// Register a PUT route (for chaining without .name())
    pub fn put<H, Fut>(self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.router.put(path, handler)
    }

    /// Register a DELETE route (for chaining without .name())
    pub fn delete<H, Fut>(self, path: &str, handler: H) -> RouteBuilder
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.router.delete(path, handler)
    }
}

impl From<RouteBuilder> for Router {
    fn from(builder: RouteBuilder) -> Self {
        builder.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::text;

    fn sample_router() -> Router {
        Router::new()
            .get("/users", |_req| async { text("index") })
            .get("/users/{id}", |_req| async { text("show") })
            .post("/users", |_req| async { text("store") })
            .into()
    }

    #[test]
    fn test_match_route_extracts_params() {
        let router = sample_router();
        let (_, params) = router
            .match_route(&hyper::Method::GET, "/users/42")
            .unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_match_route_misses_unknown_paths() {
        let router = sample_router();
        assert!(router.match_route(&hyper::Method::GET, "/nope").is_none());
        assert!(router
            .match_route(&hyper::Method::DELETE, "/users")
            .is_none());
    }

    #[test]
    fn test_allowed_methods() {
        let router = sample_router();
        assert_eq!(router.allowed_methods("/users"), vec!["GET", "POST"]);
        assert_eq!(router.allowed_methods("/users/7"), vec!["GET"]);
        assert!(router.allowed_methods("/nope").is_empty());
    }

    #[test]
    fn test_records_track_registration_order() {
        let router = sample_router();
        let paths: Vec<&str> = router.records().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/users", "/users/{id}", "/users"]);
        assert_eq!(router.records()[2].method, RouteMethod::Post);
    }

    #[test]
    fn test_named_route_url_generation() {
        let router = Router::new()
            .get("/teams/{team}/members/{id}", |_req| async { text("ok") })
            .name("teams.members.show");
        let _ = router;

        let url = route("teams.members.show", &[("team", "alpha"), ("id", "3")]);
        assert_eq!(url, Some("/teams/alpha/members/3".to_string()));
        assert_eq!(route("missing.route", &[]), None);
    }

    #[test]
    fn test_route_method_parse() {
        assert_eq!(RouteMethod::parse("get"), Some(RouteMethod::Get));
        assert_eq!(RouteMethod::parse("DELETE"), Some(RouteMethod::Delete));
        assert_eq!(RouteMethod::parse("TRACE"), None);
    }
}
