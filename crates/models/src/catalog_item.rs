use sea_orm::entity::prelude::*;
use uuid::Uuid;
use chrono::Utc;

use crate::{account, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "catalog_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning account.
    pub user_id: Uuid,
    pub number: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Account }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Account => Entity::belongs_to(account::Entity)
                .from(Column::UserId)
                .to(account::Column::Id)
                .into(),
        }
    }
}

impl Related<account::Entity> for Entity {
    fn to() -> RelationDef { Relation::Account.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn new(user_id: Uuid, number: &str, title: &str, description: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            number: number.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            created_at: Utc::now().into(),
        }
    }
}

pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    if title.trim().is_empty() { return Err(errors::ModelError::required("title")); }
    if title.chars().count() > 255 { return Err(errors::ModelError::too_long("title", 255)); }
    Ok(())
}

pub fn validate_number(number: &str) -> Result<(), errors::ModelError> {
    if number.trim().is_empty() { return Err(errors::ModelError::required("number")); }
    Ok(())
}
