use brim::http::json;
use brim::{Request, Response};

pub async fn check(_req: Request) -> Response {
    json(serde_json::json!({ "status": "ok" }))
}
