use brim::http::json;
use brim::{AppConfig, Config, Request, Response};

pub async fn index(req: Request) -> Response {
    let app = Config::get::<AppConfig>().unwrap_or_default();

    json(serde_json::json!({
        "app": app.name,
        "environment": app.environment.to_string(),
        "base_url": req.context().base_url.clone(),
    }))
}
