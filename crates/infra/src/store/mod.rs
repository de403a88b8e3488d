//! Document store abstractions for the catalog and warehouse collections.

pub mod document;
pub mod in_memory;

pub use document::{CatalogStore, StoreError, Versioned, WarehouseStore};
pub use in_memory::{InMemoryCatalogStore, InMemoryWarehouseStore};
