use std::sync::Arc;

use thiserror::Error;

use stockroom_catalog::Product;
use stockroom_core::WarehouseId;
use stockroom_warehouse::Warehouse;

/// Store operation error.
///
/// These are infrastructure failures (missing document, key collision, stale
/// version) as opposed to domain errors; the service layer translates them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,

    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("version conflict: expected {expected}, found {found}")]
    VersionConflict { expected: u64, found: u64 },

    #[error("store backend failure: {0}")]
    Backend(String),
}

/// A document together with its store-managed version.
///
/// The version changes on every replace; callers hand it back when writing
/// so the store can reject stale read-modify-write cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub version: u64,
    pub document: T,
}

/// Keyed store for the product catalog collection.
///
/// Product ids are caller-supplied strings; uniqueness is enforced by the
/// store at insert time.
pub trait CatalogStore: Send + Sync {
    /// Insert a new product. Fails with `DuplicateKey` when the id is taken.
    fn insert_new(&self, product: Product) -> Result<(), StoreError>;

    fn get(&self, id: &str) -> Option<Product>;

    /// All products, optionally narrowed to one category. Order unspecified.
    fn list(&self, category: Option<&str>) -> Vec<Product>;

    fn remove(&self, id: &str) -> Result<(), StoreError>;

    /// Drop every product document.
    fn clear(&self);
}

/// Keyed store for warehouse documents (each embedding its inventory ledger).
///
/// Mutations go through whole-document replace guarded by a per-document
/// version, so a concurrent reader never observes a partially-updated
/// ledger and racing writers cannot silently lose updates.
pub trait WarehouseStore: Send + Sync {
    /// Insert a freshly registered warehouse at version 1.
    fn insert(&self, warehouse: Warehouse) -> Result<(), StoreError>;

    fn get(&self, id: WarehouseId) -> Option<Versioned<Warehouse>>;

    /// Snapshot of every warehouse document. Order unspecified.
    fn list(&self) -> Vec<Warehouse>;

    /// Replace the whole document if the stored version still matches.
    /// Returns the new version.
    fn replace(&self, expected_version: u64, warehouse: Warehouse) -> Result<u64, StoreError>;

    fn remove(&self, id: WarehouseId) -> Result<(), StoreError>;

    /// Drop every warehouse document (entries go with their warehouse).
    fn clear(&self);
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn insert_new(&self, product: Product) -> Result<(), StoreError> {
        (**self).insert_new(product)
    }

    fn get(&self, id: &str) -> Option<Product> {
        (**self).get(id)
    }

    fn list(&self, category: Option<&str>) -> Vec<Product> {
        (**self).list(category)
    }

    fn remove(&self, id: &str) -> Result<(), StoreError> {
        (**self).remove(id)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

impl<S> WarehouseStore for Arc<S>
where
    S: WarehouseStore + ?Sized,
{
    fn insert(&self, warehouse: Warehouse) -> Result<(), StoreError> {
        (**self).insert(warehouse)
    }

    fn get(&self, id: WarehouseId) -> Option<Versioned<Warehouse>> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<Warehouse> {
        (**self).list()
    }

    fn replace(&self, expected_version: u64, warehouse: Warehouse) -> Result<u64, StoreError> {
        (**self).replace(expected_version, warehouse)
    }

    fn remove(&self, id: WarehouseId) -> Result<(), StoreError> {
        (**self).remove(id)
    }

    fn clear(&self) {
        (**self).clear()
    }
}
