mod handlers;
mod router;

pub use handlers::{register_handler, resolve_handler};
pub use router::{
    register_route_name, route, BoxedHandler, RouteBuilder, RouteMethod, RouteRecord, Router,
};
