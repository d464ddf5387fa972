//! Entity Store accessor: the persistence contract the services are written against.
//!
//! - `memory`: `Vec`-backed store for tests and local runs.
//! - `seaorm`: Postgres-backed stores (feature `seaorm`).

use async_trait::async_trait;
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use models::{account, catalog_item};

use crate::errors::ServiceError;

pub mod memory;
#[cfg(feature = "seaorm")]
pub mod seaorm;

/// A persisted entity the list query can filter and order.
pub trait Record: Clone + Send + Sync + 'static {
    /// Resource kind used in not-found messages.
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    /// Creation time; lists are ordered by this ascending.
    fn created_at(&self) -> DateTimeWithTimeZone;

    /// Field the list search matches against.
    fn search_field(&self) -> &str;
}

impl Record for account::Model {
    const KIND: &'static str = "Account";

    fn id(&self) -> Uuid { self.id }
    fn created_at(&self) -> DateTimeWithTimeZone { self.created_at }
    fn search_field(&self) -> &str { &self.first_name }
}

impl Record for catalog_item::Model {
    const KIND: &'static str = "Catalog item";

    fn id(&self) -> Uuid { self.id }
    fn created_at(&self) -> DateTimeWithTimeZone { self.created_at }
    fn search_field(&self) -> &str { &self.title }
}

/// Filter and window handed to a store.
///
/// `contains` is matched case-insensitively against [`Record::search_field`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreQuery {
    pub contains: Option<String>,
    pub skip: Option<u64>,
    pub take: Option<u64>,
}

impl StoreQuery {
    /// The same filter without the window, as used for counting.
    pub fn unwindowed(&self) -> Self {
        Self { contains: self.contains.clone(), skip: None, take: None }
    }
}

/// Case-insensitive substring test shared by the in-memory store.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
pub trait EntityStore<E: Record>: Send + Sync {
    /// Rows matching `query.contains`, oldest first, then sliced by `skip`/`take`.
    async fn find(&self, query: &StoreQuery) -> Result<Vec<E>, ServiceError>;

    /// Rows matching `query.contains`; `skip`/`take` are ignored.
    async fn count(&self, query: &StoreQuery) -> Result<u64, ServiceError>;

    async fn fetch_one(&self, id: Uuid) -> Result<Option<E>, ServiceError>;

    /// Insert, or overwrite the row with the same id.
    async fn save(&self, entity: E) -> Result<E, ServiceError>;

    /// `false` when no row had that id.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_ignores_case() {
        assert!(contains_ignore_case("Moby Dick", "moby"));
        assert!(contains_ignore_case("Moby Dick", "BY D"));
        assert!(!contains_ignore_case("The Very Hungry Caterpillar", "Moby"));
    }

    #[test]
    fn record_kinds_and_search_fields() {
        let a = account::Model::new("Donny", "Don", None, account::Role::Member);
        assert_eq!(a.search_field(), "Donny");
        assert_eq!(<account::Model as Record>::KIND, "Account");

        let i = catalog_item::Model::new(a.id, "n1", "Moby Dick", "whale");
        assert_eq!(i.search_field(), "Moby Dick");
        assert_eq!(Record::id(&i), i.id);
    }

    #[test]
    fn unwindowed_drops_skip_and_take() {
        let q = StoreQuery { contains: Some("x".into()), skip: Some(1), take: Some(2) };
        assert_eq!(q.unwindowed(), StoreQuery { contains: Some("x".into()), skip: None, take: None });
    }
}
