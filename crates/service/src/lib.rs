//! Resource-access layer between storage and wire DTOs.
//! - `store`: persistence contract plus in-memory and SeaORM implementations.
//! - `query`: filtered, ordered, paginated listing and id lookup.
//! - `mapper` / `dto`: allow-listed projections and request payloads.
//! - `guard`: ownership policy for owned resources.
//! - `account` / `catalog_item`: one access service per resource kind.

pub mod errors;
pub mod pagination;
pub mod store;
pub mod query;
pub mod dto;
pub mod mapper;
pub mod guard;
pub mod account;
pub mod catalog_item;
#[cfg(all(test, feature = "seaorm"))]
pub mod test_support;

pub use account::AccountService;
pub use catalog_item::{CatalogItemService, PublicCatalogItemService};
