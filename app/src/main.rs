use brim::{Application, Exclusion};

mod bootstrap;
mod controllers;
mod middleware;
mod routes;

#[tokio::main]
async fn main() {
    Application::new()
        .bootstrap(bootstrap::register)
        .routes(routes::register)
        .modules("modules")
        // Anything under a drafts/ directory is work in progress and must
        // not be wired into the running app.
        .modules_exclude(Exclusion::token("drafts"))
        .run()
        .await;
}
