use brim::Router;

use crate::controllers;

/// Base routes registered in code
///
/// Module routes from `modules/*.router.json` are layered on top of these.
pub fn register() -> Router {
    Router::new().get("/", controllers::home::index).name("home")
}
