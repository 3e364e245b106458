use brim::http::json;
use brim::{AppError, HttpResponse, Request, Response, ResponseExt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
}

// Stand-in for a persistence layer.
fn demo_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Ada Lovelace".to_string(),
        },
        User {
            id: 2,
            name: "Grace Hopper".to_string(),
        },
    ]
}

pub async fn index(_req: Request) -> Response {
    json(serde_json::json!({ "users": demo_users() }))
}

pub async fn show(req: Request) -> Response {
    let raw = req.param("id")?;
    let id: u32 = raw
        .parse()
        .map_err(|_| HttpResponse::from(AppError::bad_request(format!("invalid user id '{}'", raw))))?;

    match demo_users().into_iter().find(|u| u.id == id) {
        Some(user) => json(serde_json::json!(user)),
        None => Err(AppError::not_found(format!("user {} not found", id)).into()),
    }
}

pub async fn store(req: Request) -> Response {
    let data: CreateUser = req.json().await?;

    let user = User {
        id: demo_users().len() as u32 + 1,
        name: data.name,
    };
    json(serde_json::json!(user)).status(201)
}
