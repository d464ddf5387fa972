use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use service::dto::{AccountDto, AccountRequest};
use tracing::info;

use super::auth::Caller;
use super::listing::{parse_id, ListParams, PagedResponse};
use crate::errors::{ApiJson, JsonApiError};
use crate::state::ServerState;

const KIND: &str = "Account";

#[utoipa::path(
    get, path = "/account", tag = "account", operation_id = "list_accounts",
    params(ListParams),
    responses(
        (status = 200, description = "Page of accounts"),
        (status = 400, description = "Bad limit or offset"),
        (status = 401, description = "Missing caller")
    ),
    security(("bearer" = []))
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PagedResponse<AccountDto>>, JsonApiError> {
    let page = state.accounts.list(&params.to_page_request()?).await?;
    Ok(Json(PagedResponse::echo(page, &params)))
}

#[utoipa::path(
    get, path = "/account/{id}", tag = "account", operation_id = "get_account",
    params(("id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AccountDoc),
        (status = 404, description = "Not found")
    ),
    security(("bearer" = []))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<AccountDto>, JsonApiError> {
    let id = parse_id(&id, KIND)?;
    Ok(Json(state.accounts.get(id).await?))
}

#[utoipa::path(
    post, path = "/account", tag = "account", operation_id = "create_account",
    request_body = crate::openapi::AccountRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::AccountDoc),
        (status = 400, description = "Invalid payload")
    ),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<ServerState>,
    Extension(caller): Extension<Caller>,
    ApiJson(input): ApiJson<AccountRequest>,
) -> Result<(StatusCode, Json<AccountDto>), JsonApiError> {
    input.validate()?;
    let created = state.accounts.create(input).await?;
    info!(%caller, account_id = %created.id, "account_create_request");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/account/{id}", tag = "account", operation_id = "update_account",
    params(("id" = String, Path, description = "Account ID")),
    request_body = crate::openapi::AccountRequestDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AccountDoc),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Not found")
    ),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<AccountRequest>,
) -> Result<Json<AccountDto>, JsonApiError> {
    let id = parse_id(&id, KIND)?;
    input.validate()?;
    let updated = state.accounts.update(id, input).await?;
    info!(%caller, account_id = %id, "account_update_request");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/account/{id}", tag = "account", operation_id = "delete_account",
    params(("id" = String, Path, description = "Account ID")),
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
    state.accounts.delete(id).await?;
    info!(%caller, account_id = %id, "account_delete_request");
    Ok(StatusCode::OK)
}
