//! Postgres stores over the `models` entities.
//!
//! Search runs as `LOWER(col) LIKE '%term%'` with LIKE metacharacters escaped,
//! so it matches the in-memory store's case-insensitive containment.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};
use uuid::Uuid;

use models::{account, catalog_item};

use super::{EntityStore, StoreQuery};
use crate::errors::ServiceError;
use crate::pagination::MAX_WINDOW;

/// `%term%` with `\`, `%` and `_` escaped, lower-cased.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

fn filtered<E, C>(select: Select<E>, column: C, query: &StoreQuery) -> Select<E>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    match query.contains.as_deref() {
        Some(term) => select.filter(
            Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(like_pattern(term)).escape('\\')),
        ),
        None => select,
    }
}

/// Postgres binds OFFSET/LIMIT as `i64`; larger values are refused here instead of at bind time.
fn windowed<E: EntityTrait>(mut select: Select<E>, query: &StoreQuery) -> Result<Select<E>, ServiceError> {
    let bounded = |name: &str, n: u64| {
        if n > MAX_WINDOW {
            return Err(ServiceError::Validation(format!("{name} must not exceed {MAX_WINDOW}")));
        }
        Ok(n)
    };
    if let Some(n) = query.skip {
        select = select.offset(bounded("offset", n)?);
    }
    if let Some(n) = query.take {
        select = select.limit(bounded("limit", n)?);
    }
    Ok(select)
}

pub struct SeaOrmAccountStore {
    pub db: DatabaseConnection,
}

#[async_trait]
impl EntityStore<account::Model> for SeaOrmAccountStore {
    async fn find(&self, query: &StoreQuery) -> Result<Vec<account::Model>, ServiceError> {
        let select = filtered(account::Entity::find(), account::Column::FirstName, query)
            .order_by_asc(account::Column::CreatedAt)
            .order_by_asc(account::Column::Id);
        windowed(select, query)?
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn count(&self, query: &StoreQuery) -> Result<u64, ServiceError> {
        filtered(account::Entity::find(), account::Column::FirstName, query)
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn fetch_one(&self, id: Uuid) -> Result<Option<account::Model>, ServiceError> {
        account::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, entity: account::Model) -> Result<account::Model, ServiceError> {
        let am = account::ActiveModel {
            id: Set(entity.id),
            first_name: Set(entity.first_name),
            last_name: Set(entity.last_name),
            email: Set(entity.email),
            role: Set(entity.role),
            created_at: Set(entity.created_at),
        };
        account::Entity::insert(am)
            .on_conflict(
                OnConflict::column(account::Column::Id)
                    .update_columns([
                        account::Column::FirstName,
                        account::Column::LastName,
                        account::Column::Email,
                        account::Column::Role,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = account::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}

pub struct SeaOrmCatalogItemStore {
    pub db: DatabaseConnection,
}

#[async_trait]
impl EntityStore<catalog_item::Model> for SeaOrmCatalogItemStore {
    async fn find(&self, query: &StoreQuery) -> Result<Vec<catalog_item::Model>, ServiceError> {
        let select = filtered(catalog_item::Entity::find(), catalog_item::Column::Title, query)
            .order_by_asc(catalog_item::Column::CreatedAt)
            .order_by_asc(catalog_item::Column::Id);
        windowed(select, query)?
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn count(&self, query: &StoreQuery) -> Result<u64, ServiceError> {
        filtered(catalog_item::Entity::find(), catalog_item::Column::Title, query)
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn fetch_one(&self, id: Uuid) -> Result<Option<catalog_item::Model>, ServiceError> {
        catalog_item::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, entity: catalog_item::Model) -> Result<catalog_item::Model, ServiceError> {
        let am = catalog_item::ActiveModel {
            id: Set(entity.id),
            user_id: Set(entity.user_id),
            number: Set(entity.number),
            title: Set(entity.title),
            description: Set(entity.description),
            created_at: Set(entity.created_at),
        };
        catalog_item::Entity::insert(am)
            .on_conflict(
                OnConflict::column(catalog_item::Column::Id)
                    .update_columns([
                        catalog_item::Column::UserId,
                        catalog_item::Column::Number,
                        catalog_item::Column::Title,
                        catalog_item::Column::Description,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = catalog_item::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
