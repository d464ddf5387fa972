#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::{routes, ServerState};

pub const CALLER: &str = "caller-7";

pub fn app() -> Router {
    routes::build_router(ServerState::in_memory(), CorsLayer::very_permissive())
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    caller: Option<&str>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(c) = caller {
        builder = builder.header("authorization", format!("Bearer {c}"));
    }
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

pub async fn create_account(app: &Router, first_name: &str) -> anyhow::Result<Value> {
    let (status, body) = send(
        app,
        "POST",
        "/account",
        Some(json!({"firstName": first_name, "lastName": "Tester", "role": "member"})),
        Some(CALLER),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    Ok(body)
}

pub async fn create_item(app: &Router, owner: &str, number: &str, title: &str) -> anyhow::Result<Value> {
    let (status, body) = send(
        app,
        "POST",
        "/catalog-item",
        Some(json!({"userId": owner, "number": number, "title": title, "description": "desc"})),
        Some(CALLER),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    Ok(body)
}

pub fn id_of(v: &Value) -> String {
    v["id"].as_str().unwrap_or_default().to_string()
}
