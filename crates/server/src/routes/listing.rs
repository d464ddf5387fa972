//! Query parameters and response envelope shared by the list endpoints.

use serde::{Deserialize, Serialize};
use service::pagination::{Page, PageRequest, MAX_WINDOW};
use uuid::Uuid;

use crate::errors::JsonApiError;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Case-insensitive substring of the searchable field.
    pub search: Option<String>,
    /// Maximum number of items, non-negative integer.
    pub limit: Option<String>,
    /// Number of matching items to skip, non-negative integer.
    pub offset: Option<String>,
}

fn supplied(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|s| !s.is_empty())
}

fn parse_count(name: &str, raw: &Option<String>) -> Result<Option<u64>, JsonApiError> {
    supplied(raw)
        .map(|s| {
            s.parse::<u64>()
                .ok()
                .filter(|n| *n <= MAX_WINDOW)
                .ok_or_else(|| JsonApiError::bad_request(format!("{name} must be an integer in 0..={MAX_WINDOW}")))
        })
        .transpose()
}

impl ListParams {
    pub fn to_page_request(&self) -> Result<PageRequest, JsonApiError> {
        Ok(PageRequest {
            search: self.search.clone(),
            limit: parse_count("limit", &self.limit)?,
            offset: parse_count("offset", &self.offset)?,
        })
    }
}

/// `{items, total, limit?, offset?}` with `limit`/`offset` echoed as the caller sent them.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
}

impl<T> PagedResponse<T> {
    pub fn echo(page: Page<T>, params: &ListParams) -> Self {
        Self {
            items: page.items,
            total: page.total,
            limit: supplied(&params.limit).map(str::to_owned),
            offset: supplied(&params.offset).map(str::to_owned),
        }
    }
}

/// Ids that are not UUIDs cannot name any entity, so they read as not found.
pub fn parse_id(raw: &str, kind: &str) -> Result<Uuid, JsonApiError> {
    Uuid::parse_str(raw).map_err(|_| service::errors::ServiceError::not_found(kind).into())
}
