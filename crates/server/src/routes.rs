pub mod accounts;
pub mod auth;
pub mod catalog_items;
pub mod listing;
pub mod public_catalog_items;

use axum::{middleware, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router: public catalog and health without auth,
/// account and catalog-item management behind the caller check.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/public-catalog-item", get(public_catalog_items::list))
        .route("/public-catalog-item/:id", get(public_catalog_items::get));

    let protected = Router::new()
        .route("/account", get(accounts::list).post(accounts::create))
        .route(
            "/account/:id",
            get(accounts::get).put(accounts::update).delete(accounts::delete),
        )
        .route("/catalog-item", get(catalog_items::list).post(catalog_items::create))
        .route(
            "/catalog-item/:id",
            get(catalog_items::get).put(catalog_items::update).delete(catalog_items::delete),
        )
        .route_layer(middleware::from_fn(auth::require_caller));

    public
        .merge(protected)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
