//! Catalog persistence

mod json_catalog;

pub use json_catalog::JsonCatalogStore;
