use std::sync::Arc;

use models::{account, catalog_item};
use sea_orm::DatabaseConnection;
use service::store::memory::MemoryStore;
use service::store::seaorm::{SeaOrmAccountStore, SeaOrmCatalogItemStore};
use service::store::EntityStore;
use service::{AccountService, CatalogItemService, PublicCatalogItemService};

/// Services shared by all handlers. Holds no per-request state.
#[derive(Clone)]
pub struct ServerState {
    pub accounts: Arc<AccountService>,
    pub catalog_items: Arc<CatalogItemService>,
    pub public_catalog_items: Arc<PublicCatalogItemService>,
}

impl ServerState {
    pub fn new(
        accounts: Arc<dyn EntityStore<account::Model>>,
        catalog_items: Arc<dyn EntityStore<catalog_item::Model>>,
    ) -> Self {
        let items = CatalogItemService::new(catalog_items);
        let public = items.public_view();
        Self {
            accounts: Arc::new(AccountService::new(accounts)),
            catalog_items: Arc::new(items),
            public_catalog_items: Arc::new(public),
        }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmAccountStore { db: db.clone() }),
            Arc::new(SeaOrmCatalogItemStore { db }),
        )
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::<account::Model>::new()),
            Arc::new(MemoryStore::<catalog_item::Model>::new()),
        )
    }
}
