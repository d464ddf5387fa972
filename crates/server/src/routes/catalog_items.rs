use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use service::dto::{CatalogItemDto, CatalogItemRequest};
use tracing::info;

use super::auth::Caller;
use super::listing::{parse_id, ListParams, PagedResponse};
use crate::errors::{ApiJson, JsonApiError};
use crate::state::ServerState;

const KIND: &str = "Catalog item";

#[utoipa::path(
    get, path = "/catalog-item", tag = "catalog-item", operation_id = "list_catalog_items",
    params(ListParams),
    responses(
        (status = 200, description = "Page of catalog items"),
        (status = 400, description = "Bad limit or offset"),
        (status = 401, description = "Missing caller")
    ),
    security(("bearer" = []))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PagedResponse<CatalogItemDto>>, JsonApiError> {
    let page = state.catalog_items.list(&params.to_page_request()?).await?;
    Ok(Json(PagedResponse::echo(page, &params)))
}

#[utoipa::path(
    get, path = "/catalog-item/{id}", tag = "catalog-item", operation_id = "get_catalog_item",
    params(("id" = String, Path, description = "Catalog item ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CatalogItemDoc),
        (status = 404, description = "Not found")
    ),
    security(("bearer" = []))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<CatalogItemDto>, JsonApiError> {
    let id = parse_id(&id, KIND)?;
    Ok(Json(state.catalog_items.get(id).await?))
}

#[utoipa::path(
    post, path = "/catalog-item", tag = "catalog-item", operation_id = "create_catalog_item",
    request_body = crate::openapi::CatalogItemRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CatalogItemDoc),
        (status = 400, description = "Invalid payload")
    ),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<ServerState>,
    Extension(caller): Extension<Caller>,
    ApiJson(input): ApiJson<CatalogItemRequest>,
) -> Result<(StatusCode, Json<CatalogItemDto>), JsonApiError> {
    input.validate()?;
    let created = state.catalog_items.create(input).await?;
    info!(%caller, item_id = %created.id, "catalog_item_create_request");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/catalog-item/{id}", tag = "catalog-item", operation_id = "update_catalog_item",
    params(("id" = String, Path, description = "Catalog item ID")),
    request_body = crate::openapi::CatalogItemRequestDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CatalogItemDoc),
        (status = 403, description = "Payload owner differs from stored owner"),
        (status = 404, description = "Not found")
    ),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<CatalogItemRequest>,
) -> Result<Json<CatalogItemDto>, JsonApiError> {
    let id = parse_id(&id, KIND)?;
    input.validate()?;
    let updated = state.catalog_items.update(id, input).await?;
    info!(%caller, item_id = %id, "catalog_item_update_request");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/catalog-item/{id}", tag = "catalog-item", operation_id = "delete_catalog_item",
    params(("id" = String, Path, description = "Catalog item ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    ),
    security(("bearer" = []))
)]
pub async fn delete(
    State(state): State<ServerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(&id, KIND)?;
    state.catalog_items.delete(id).await?;
    info!(%caller, item_id = %id, "catalog_item_delete_request");
    Ok(StatusCode::OK)
}
