use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct AccountDoc {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    /// `member` or `admin`
    pub role: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct AccountRequestDoc {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    /// Read on create only.
    pub email: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CatalogItemDoc {
    pub id: Uuid,
    pub user_id: Uuid,
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CatalogItemRequestDoc {
    pub user_id: Uuid,
    pub number: String,
    pub title: String,
    pub description: Option<String>,
}

struct BearerCaller;

impl Modify for BearerCaller {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::accounts::list,
        crate::routes::accounts::get,
        crate::routes::accounts::create,
        crate::routes::accounts::update,
        crate::routes::accounts::delete,
        crate::routes::catalog_items::list,
        crate::routes::catalog_items::get,
        crate::routes::catalog_items::create,
        crate::routes::catalog_items::update,
        crate::routes::catalog_items::delete,
        crate::routes::public_catalog_items::list,
        crate::routes::public_catalog_items::get,
    ),
    components(
        schemas(
            HealthResponse,
            AccountDoc,
            AccountRequestDoc,
            CatalogItemDoc,
            CatalogItemRequestDoc,
        )
    ),
    modifiers(&BearerCaller),
    tags(
        (name = "health"),
        (name = "account"),
        (name = "catalog-item"),
        (name = "public")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_resource_path() {
        let doc = ApiDoc::openapi();
        for path in ["/account", "/account/{id}", "/catalog-item/{id}", "/public-catalog-item", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let schemes = doc.components.expect("components").security_schemes;
        assert!(schemes.contains_key("bearer"));
    }
}
