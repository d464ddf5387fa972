//! Wire shapes: allow-listed outputs and the request payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::account::{self, Role};
use models::catalog_item;

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub number: String,
    pub title: String,
    pub description: String,
}

/// Create/update payload for accounts. `email` is only read on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
}

impl AccountRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        account::validate_name("firstName", &self.first_name)?;
        account::validate_name("lastName", &self.last_name)?;
        if let Some(email) = &self.email {
            account::validate_email(email)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemRequest {
    pub user_id: Uuid,
    pub number: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogItemRequest {
    pub fn validate(&self) -> Result<(), ServiceError> {
        catalog_item::validate_number(&self.number)?;
        catalog_item::validate_title(&self.title)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_request_reads_camel_case() {
        let req: AccountRequest =
            serde_json::from_value(json!({"firstName": "Mark", "lastName": "Stone", "role": "admin"})).unwrap();
        assert_eq!(req.first_name, "Mark");
        assert_eq!(req.role, Role::Admin);
        assert!(req.email.is_none());
        req.validate().unwrap();
    }

    #[test]
    fn unknown_role_is_rejected() {
        let res = serde_json::from_value::<AccountRequest>(json!({"firstName": "a", "lastName": "b", "role": "root"}));
        assert!(res.is_err());
    }

    #[test]
    fn catalog_item_request_validation() {
        let mut req: CatalogItemRequest = serde_json::from_value(json!({
            "userId": Uuid::new_v4(), "number": "a1b2", "title": "Matilda", "description": "Kids book"
        }))
        .unwrap();
        req.validate().unwrap();
        req.title = "   ".into();
        assert!(req.validate().unwrap_err().is_validation());
    }
}
