//! Filtered List Query and Single-Item Lookup over any [`EntityStore`].

use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};
use crate::store::{EntityStore, Record, StoreQuery};

/// Search, order by creation, count the full match set, then slice it.
///
/// `total` comes from a separate count over the same filter, so it never
/// reflects the `offset`/`limit` window.
pub async fn list_filtered<E: Record>(
    store: &dyn EntityStore<E>,
    req: &PageRequest,
) -> Result<Page<E>, ServiceError> {
    req.check_window()?;
    let query = StoreQuery {
        contains: req.search_term().map(str::to_owned),
        skip: req.offset,
        take: req.limit,
    };
    let total = store.count(&query.unwindowed()).await?;
    let items = store.find(&query).await?;
    debug!(kind = E::KIND, total, returned = items.len(), "filtered list");
    Ok(Page { items, total, limit: req.limit, offset: req.offset })
}

/// Exact primary-key lookup; `NotFound` names the resource kind.
pub async fn lookup<E: Record>(store: &dyn EntityStore<E>, id: Uuid) -> Result<E, ServiceError> {
    store
        .fetch_one(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(E::KIND))
}

/// Lookup followed by delete. A row removed between the two steps also yields `NotFound`.
pub async fn remove<E: Record>(store: &dyn EntityStore<E>, id: Uuid) -> Result<(), ServiceError> {
    lookup(store, id).await?;
    if !store.delete_by_id(id).await? {
        return Err(ServiceError::not_found(E::KIND));
    }
    Ok(())
}
