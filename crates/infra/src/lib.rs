//! `stockroom-infra` — persistence abstractions.
//!
//! The domain treats persistence as an abstract document store. This crate
//! defines the store traits plus in-memory implementations (tests/dev);
//! production backends plug in behind the same traits.

pub mod store;

pub use store::{
    CatalogStore, InMemoryCatalogStore, InMemoryWarehouseStore, StoreError, Versioned,
    WarehouseStore,
};
