use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use super::{contains_ignore_case, EntityStore, Record, StoreQuery};
use crate::errors::ServiceError;

/// In-memory store keeping rows in insertion order.
///
/// Equal creation timestamps keep their insertion order when listed.
pub struct MemoryStore<E> {
    rows: Mutex<Vec<E>>,
}

impl<E: Record> Default for MemoryStore<E> {
    fn default() -> Self { Self { rows: Mutex::new(Vec::new()) } }
}

impl<E: Record> MemoryStore<E> {
    pub fn new() -> Self { Self::default() }

    pub fn with_rows(rows: Vec<E>) -> Self { Self { rows: Mutex::new(rows) } }

    pub fn len(&self) -> usize { self.rows.lock().map(|r| r.len()).unwrap_or(0) }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    fn rows(&self) -> Result<MutexGuard<'_, Vec<E>>, ServiceError> {
        self.rows.lock().map_err(|_| ServiceError::Db("memory store lock poisoned".into()))
    }

    fn matching<'a>(rows: &'a [E], query: &StoreQuery) -> Vec<&'a E> {
        let mut hits: Vec<&E> = rows
            .iter()
            .filter(|e| match query.contains.as_deref() {
                Some(term) => contains_ignore_case(e.search_field(), term),
                None => true,
            })
            .collect();
        // stable: ties stay in insertion order
        hits.sort_by_key(|e| e.created_at());
        hits
    }
}

#[async_trait]
impl<E: Record> EntityStore<E> for MemoryStore<E> {
    async fn find(&self, query: &StoreQuery) -> Result<Vec<E>, ServiceError> {
        let rows = self.rows()?;
        let skip = query.skip.map_or(0, |n| usize::try_from(n).unwrap_or(usize::MAX));
        let take = query.take.map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX));
        Ok(Self::matching(&rows, query).into_iter().skip(skip).take(take).cloned().collect())
    }

    async fn count(&self, query: &StoreQuery) -> Result<u64, ServiceError> {
        let rows = self.rows()?;
        Ok(Self::matching(&rows, query).len() as u64)
    }

    async fn fetch_one(&self, id: Uuid) -> Result<Option<E>, ServiceError> {
        let rows = self.rows()?;
        Ok(rows.iter().find(|e| e.id() == id).cloned())
    }

    async fn save(&self, entity: E) -> Result<E, ServiceError> {
        let mut rows = self.rows()?;
        match rows.iter_mut().find(|e| e.id() == entity.id()) {
            Some(slot) => *slot = entity.clone(),
            None => rows.push(entity.clone()),
        }
        Ok(entity)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut rows = self.rows()?;
        let before = rows.len();
        rows.retain(|e| e.id() != id);
        Ok(rows.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use models::catalog_item;

    fn item(title: &str, age_secs: i64) -> catalog_item::Model {
        let mut m = catalog_item::Model::new(Uuid::new_v4(), "n", title, "d");
        m.created_at = (Utc::now() - Duration::seconds(age_secs)).into();
        m
    }

    #[tokio::test]
    async fn find_orders_by_creation_not_insertion() -> Result<(), anyhow::Error> {
        let newer = item("Newer", 10);
        let older = item("Older", 100);
        let store = MemoryStore::with_rows(vec![newer.clone(), older.clone()]);

        let rows = store.find(&StoreQuery::default()).await?;
        let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Older", "Newer"]);
        Ok(())
    }

    #[tokio::test]
    async fn window_applies_after_filter() -> Result<(), anyhow::Error> {
        let store = MemoryStore::with_rows(vec![
            item("Moby Dick", 50),
            item("Caterpillar", 40),
            item("moby again", 30),
            item("MOBY three", 20),
        ]);
        let q = StoreQuery { contains: Some("moby".into()), skip: Some(1), take: Some(1) };
        let rows = store.find(&q).await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "moby again");
        assert_eq!(store.count(&q).await?, 3);
        Ok(())
    }

    #[tokio::test]
    async fn take_zero_is_empty() -> Result<(), anyhow::Error> {
        let store = MemoryStore::with_rows(vec![item("a", 2), item("b", 1)]);
        let q = StoreQuery { contains: None, skip: None, take: Some(0) };
        assert!(store.find(&q).await?.is_empty());
        assert_eq!(store.count(&q).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn save_overwrites_in_place_and_delete_reports_presence() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let mut m = store.save(item("first", 5)).await?;
        m.title = "renamed".into();
        store.save(m.clone()).await?;
        assert_eq!(store.len(), 1);
        assert_eq!(store.fetch_one(m.id).await?.unwrap().title, "renamed");

        assert!(store.delete_by_id(m.id).await?);
        assert!(!store.delete_by_id(m.id).await?);
        assert!(store.fetch_one(m.id).await?.is_none());
        assert!(store.is_empty());
        Ok(())
    }
}
