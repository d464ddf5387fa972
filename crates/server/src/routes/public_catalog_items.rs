//! Unauthenticated, read-only view of the catalog.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use service::dto::CatalogItemDto;

use super::listing::{parse_id, ListParams, PagedResponse};
use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/public-catalog-item", tag = "public", operation_id = "list_public_catalog_items",
    params(ListParams),
    responses(
        (status = 200, description = "Page of catalog items"),
        (status = 400, description = "Bad limit or offset")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PagedResponse<CatalogItemDto>>, JsonApiError> {
    let page = state.public_catalog_items.list(&params.to_page_request()?).await?;
    Ok(Json(PagedResponse::echo(page, &params)))
}

#[utoipa::path(
    get, path = "/public-catalog-item/{id}", tag = "public", operation_id = "get_public_catalog_item",
    params(("id" = String, Path, description = "Catalog item ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CatalogItemDoc),
        (status = 404, description = "Not found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<CatalogItemDto>, JsonApiError> {
    let id = parse_id(&id, "Catalog item")?;
    Ok(Json(state.public_catalog_items.get(id).await?))
}
