//! Entity to DTO projection. Each field is copied by name; nothing else leaves.

use models::{account, catalog_item};

use crate::dto::{AccountDto, CatalogItemDto};

pub fn account_dto(model: &account::Model) -> AccountDto {
    AccountDto {
        id: model.id,
        first_name: model.first_name.clone(),
        last_name: model.last_name.clone(),
        email: model.email.clone(),
        role: model.role,
    }
}

pub fn catalog_item_dto(model: &catalog_item::Model) -> CatalogItemDto {
    CatalogItemDto {
        id: model.id,
        user_id: model.user_id,
        number: model.number.clone(),
        title: model.title.clone(),
        description: model.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::account::Role;
    use uuid::Uuid;

    #[test]
    fn account_projection_has_only_allowed_fields() {
        let m = account::Model::new("Ada", "Lovelace", Some("ada@example.com".into()), Role::Member);
        let v = serde_json::to_value(account_dto(&m)).unwrap();
        let mut keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["email", "firstName", "id", "lastName", "role"]);
        assert_eq!(v["role"], "member");
    }

    #[test]
    fn catalog_item_projection_drops_created_at() {
        let m = catalog_item::Model::new(Uuid::new_v4(), "a1b2", "Matilda", "Kids book");
        let dto = catalog_item_dto(&m);
        assert_eq!(dto.id, m.id);
        assert_eq!(dto.user_id, m.user_id);
        let v = serde_json::to_value(dto).unwrap();
        assert!(v.get("createdAt").is_none());
        assert_eq!(v.as_object().unwrap().len(), 5);
    }
}
