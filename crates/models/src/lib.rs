//! SeaORM entities for accounts and catalog items, plus connection helpers.

pub mod errors;
pub mod db;
pub mod account;
pub mod catalog_item;
