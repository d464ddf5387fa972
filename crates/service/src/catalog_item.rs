use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use models::catalog_item;

use crate::dto::{CatalogItemDto, CatalogItemRequest};
use crate::errors::ServiceError;
use crate::guard::{self, Ownership, OwnershipPolicy};
use crate::mapper;
use crate::pagination::{Page, PageRequest};
use crate::query;
use crate::store::EntityStore;

type ItemStore = Arc<dyn EntityStore<catalog_item::Model>>;

async fn list_items(store: &ItemStore, req: &PageRequest) -> Result<Page<CatalogItemDto>, ServiceError> {
    let page = query::list_filtered(store.as_ref(), req).await?;
    Ok(page.map(|m| mapper::catalog_item_dto(&m)))
}

async fn get_item(store: &ItemStore, id: Uuid) -> Result<CatalogItemDto, ServiceError> {
    let found = query::lookup(store.as_ref(), id).await?;
    Ok(mapper::catalog_item_dto(&found))
}

/// Full resource access for catalog items; updates pass through the ownership policy.
pub struct CatalogItemService {
    store: ItemStore,
    policy: OwnershipPolicy,
}

impl CatalogItemService {
    pub fn new(store: ItemStore) -> Self { Self::with_policy(store, guard::payload_owner_matches) }

    pub fn with_policy(store: ItemStore, policy: OwnershipPolicy) -> Self { Self { store, policy } }

    /// Read-only view over the same store.
    pub fn public_view(&self) -> PublicCatalogItemService { PublicCatalogItemService::new(Arc::clone(&self.store)) }

    /// Search by title.
    #[instrument(skip(self, req), fields(search = ?req.search, limit = ?req.limit, offset = ?req.offset))]
    pub async fn list(&self, req: &PageRequest) -> Result<Page<CatalogItemDto>, ServiceError> {
        list_items(&self.store, req).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<CatalogItemDto, ServiceError> {
        get_item(&self.store, id).await
    }

    /// The owner reference is taken from the payload as-is; it is assumed to name an existing account.
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn create(&self, input: CatalogItemRequest) -> Result<CatalogItemDto, ServiceError> {
        let draft = catalog_item::Model::new(input.user_id, &input.number, &input.title, &input.description);
        let created = self.store.save(draft).await?;
        info!(item_id = %created.id, user_id = %created.user_id, "catalog_item_created");
        Ok(mapper::catalog_item_dto(&created))
    }

    /// Full replace of owner, number, title and description.
    ///
    /// Fails with `Forbidden` when the policy rejects the payload's owner
    /// against the stored owner; the stored item is left untouched.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::catalog_item::CatalogItemService;
    /// use service::dto::CatalogItemRequest;
    /// use service::errors::ServiceError;
    /// use service::store::memory::MemoryStore;
    /// use models::catalog_item;
    ///
    /// let svc = CatalogItemService::new(Arc::new(MemoryStore::<catalog_item::Model>::new()));
    /// let owner = uuid::Uuid::new_v4();
    /// let req = CatalogItemRequest { user_id: owner, number: "a1".into(), title: "Moby Dick".into(), description: "".into() };
    /// let item = tokio_test::block_on(svc.create(req.clone())).unwrap();
    ///
    /// let renamed = CatalogItemRequest { title: "Matilda".into(), ..req.clone() };
    /// assert_eq!(tokio_test::block_on(svc.update(item.id, renamed)).unwrap().title, "Matilda");
    ///
    /// let stranger = CatalogItemRequest { user_id: uuid::Uuid::new_v4(), ..req };
    /// let err = tokio_test::block_on(svc.update(item.id, stranger)).unwrap_err();
    /// assert!(matches!(err, ServiceError::Forbidden(_)));
    /// ```
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn update(&self, id: Uuid, input: CatalogItemRequest) -> Result<CatalogItemDto, ServiceError> {
        let mut existing = query::lookup(self.store.as_ref(), id).await?;
        if (self.policy)(input.user_id, existing.user_id) == Ownership::Deny {
            warn!(item_id = %id, stored_owner = %existing.user_id, "catalog_item_update_denied");
            return Err(ServiceError::forbidden("You do not have access to this catalog item"));
        }
        existing.user_id = input.user_id;
        existing.number = input.number;
        existing.title = input.title;
        existing.description = input.description;
        let updated = self.store.save(existing).await?;
        info!(item_id = %updated.id, "catalog_item_updated");
        Ok(mapper::catalog_item_dto(&updated))
    }

    /// No ownership check: any caller may delete any item.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        query::remove(self.store.as_ref(), id).await?;
        info!(item_id = %id, "catalog_item_deleted");
        Ok(())
    }
}

/// Unauthenticated list and get over catalog items. No mutations.
#[derive(Clone)]
pub struct PublicCatalogItemService {
    store: ItemStore,
}

impl PublicCatalogItemService {
    pub fn new(store: ItemStore) -> Self { Self { store } }

    #[instrument(skip(self, req), fields(search = ?req.search, limit = ?req.limit, offset = ?req.offset))]
    pub async fn list(&self, req: &PageRequest) -> Result<Page<CatalogItemDto>, ServiceError> {
        list_items(&self.store, req).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<CatalogItemDto, ServiceError> {
        get_item(&self.store, id).await
    }
}
