use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::account;

use crate::dto::{AccountDto, AccountRequest};
use crate::errors::ServiceError;
use crate::mapper;
use crate::pagination::{Page, PageRequest};
use crate::query;
use crate::store::EntityStore;

/// List/get/create/update/delete for accounts. Accounts own nothing, so no guard applies.
pub struct AccountService {
    store: Arc<dyn EntityStore<account::Model>>,
}

impl AccountService {
    pub fn new(store: Arc<dyn EntityStore<account::Model>>) -> Self { Self { store } }

    /// Search by first name.
    #[instrument(skip(self, req), fields(search = ?req.search, limit = ?req.limit, offset = ?req.offset))]
    pub async fn list(&self, req: &PageRequest) -> Result<Page<AccountDto>, ServiceError> {
        let page = query::list_filtered(self.store.as_ref(), req).await?;
        Ok(page.map(|m| mapper::account_dto(&m)))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<AccountDto, ServiceError> {
        let found = query::lookup(self.store.as_ref(), id).await?;
        Ok(mapper::account_dto(&found))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: AccountRequest) -> Result<AccountDto, ServiceError> {
        let draft = account::Model::new(&input.first_name, &input.last_name, input.email, input.role);
        let created = self.store.save(draft).await?;
        info!(account_id = %created.id, role = ?created.role, "account_created");
        Ok(mapper::account_dto(&created))
    }

    /// Replace first name, last name and role. Id and email stay as stored.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: AccountRequest) -> Result<AccountDto, ServiceError> {
        let mut existing = query::lookup(self.store.as_ref(), id).await?;
        existing.first_name = input.first_name;
        existing.last_name = input.last_name;
        existing.role = input.role;
        let updated = self.store.save(existing).await?;
        info!(account_id = %updated.id, "account_updated");
        Ok(mapper::account_dto(&updated))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        query::remove(self.store.as_ref(), id).await?;
        info!(account_id = %id, "account_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use models::account::Role;

    fn service() -> AccountService {
        AccountService::new(Arc::new(MemoryStore::<account::Model>::new()))
    }

    fn request(first: &str, last: &str, role: Role) -> AccountRequest {
        AccountRequest { first_name: first.into(), last_name: last.into(), role, email: None }
    }

    #[tokio::test]
    async fn account_crud_service() -> Result<(), anyhow::Error> {
        let svc = service();

        let created = svc
            .create(AccountRequest { email: Some("john@example.com".into()), ..request("John", "Doe", Role::Member) })
            .await?;
        assert_eq!(created.first_name, "John");
        assert_eq!(created.email.as_deref(), Some("john@example.com"));

        let found = svc.get(created.id).await?;
        assert_eq!(found, created);

        let updated = svc
            .update(created.id, AccountRequest { email: Some("other@example.com".into()), ..request("Mark", "Stone", Role::Admin) })
            .await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.first_name, "Mark");
        assert_eq!(updated.last_name, "Stone");
        assert_eq!(updated.role, Role::Admin);
        // email is not part of the update contract
        assert_eq!(updated.email.as_deref(), Some("john@example.com"));

        svc.delete(created.id).await?;
        assert!(matches!(svc.get(created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn list_searches_first_name_and_paginates() -> Result<(), anyhow::Error> {
        let svc = service();
        let first = svc.create(request("John", "Doe", Role::Member)).await?;
        let second = svc.create(request("Donny", "Don", Role::Member)).await?;

        let page = svc.list(&PageRequest::new().search("Donn")).await?;
        assert_eq!(page.total, 1);
        assert_eq!(page.items, vec![second.clone()]);
        assert_eq!((page.limit, page.offset), (None, None));

        // last names are not searched
        let page = svc.list(&PageRequest::new().search("Doe")).await?;
        assert_eq!(page.total, 0);

        let page = svc.list(&PageRequest::new().limit(1).offset(0)).await?;
        assert_eq!(page.total, 2);
        assert_eq!(page.items, vec![first]);
        assert_eq!((page.limit, page.offset), (Some(1), Some(0)));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let svc = service();
        let id = Uuid::new_v4();
        let err = svc.get(id).await.unwrap_err();
        assert_eq!(err.to_string(), "Account not found");
        assert!(matches!(svc.update(id, request("a", "b", Role::Member)).await, Err(ServiceError::NotFound(_))));
    }
}
