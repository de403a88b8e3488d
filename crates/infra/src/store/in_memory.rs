use std::collections::HashMap;
use std::sync::RwLock;

use stockroom_catalog::Product;
use stockroom_core::{Entity, WarehouseId};
use stockroom_warehouse::Warehouse;

use super::document::{CatalogStore, StoreError, Versioned, WarehouseStore};

/// In-memory product catalog collection.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    products: RwLock<HashMap<String, Product>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn insert_new(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let id = product.id().clone();
        if products.contains_key(&id) {
            return Err(StoreError::DuplicateKey(id));
        }
        products.insert(id, product);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<Product> {
        let products = self.products.read().ok()?;
        products.get(id).cloned()
    }

    fn list(&self, category: Option<&str>) -> Vec<Product> {
        let products = match self.products.read() {
            Ok(p) => p,
            Err(_) => return vec![],
        };

        products
            .values()
            .filter(|p| category.is_none_or(|c| p.category() == c))
            .cloned()
            .collect()
    }

    fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        match products.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }

    fn clear(&self) {
        if let Ok(mut products) = self.products.write() {
            products.clear();
        }
    }
}

/// In-memory warehouse collection with per-document versioning.
///
/// `replace` checks the expected version under the write lock, which is what
/// makes the read-modify-replace loop in the service layer safe against
/// concurrent restocks of the same warehouse.
#[derive(Debug, Default)]
pub struct InMemoryWarehouseStore {
    warehouses: RwLock<HashMap<WarehouseId, Versioned<Warehouse>>>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WarehouseStore for InMemoryWarehouseStore {
    fn insert(&self, warehouse: Warehouse) -> Result<(), StoreError> {
        let mut warehouses = self
            .warehouses
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let id = *warehouse.id();
        if warehouses.contains_key(&id) {
            return Err(StoreError::DuplicateKey(id.to_string()));
        }
        warehouses.insert(
            id,
            Versioned {
                version: 1,
                document: warehouse,
            },
        );
        Ok(())
    }

    fn get(&self, id: WarehouseId) -> Option<Versioned<Warehouse>> {
        let warehouses = self.warehouses.read().ok()?;
        warehouses.get(&id).cloned()
    }

    fn list(&self) -> Vec<Warehouse> {
        let warehouses = match self.warehouses.read() {
            Ok(w) => w,
            Err(_) => return vec![],
        };

        warehouses.values().map(|v| v.document.clone()).collect()
    }

    fn replace(&self, expected_version: u64, warehouse: Warehouse) -> Result<u64, StoreError> {
        let mut warehouses = self
            .warehouses
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let id = *warehouse.id();
        let stored = warehouses.get_mut(&id).ok_or(StoreError::NotFound)?;

        if stored.version != expected_version {
            return Err(StoreError::VersionConflict {
                expected: expected_version,
                found: stored.version,
            });
        }

        stored.version += 1;
        stored.document = warehouse;
        Ok(stored.version)
    }

    fn remove(&self, id: WarehouseId) -> Result<(), StoreError> {
        let mut warehouses = self
            .warehouses
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        match warehouses.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }

    fn clear(&self) {
        if let Ok(mut warehouses) = self.warehouses.write() {
            warehouses.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warehouse() -> Warehouse {
        Warehouse::register("Central", "Vilnius", 100).unwrap()
    }

    #[test]
    fn catalog_insert_rejects_duplicate_id() {
        let store = InMemoryCatalogStore::new();
        store
            .insert_new(Product::register("bolt", "Bolt", "tools", 0.1).unwrap())
            .unwrap();

        let err = store
            .insert_new(Product::register("bolt", "Other bolt", "tools", 0.2).unwrap())
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(id) if id == "bolt"));
    }

    #[test]
    fn catalog_list_filters_by_category() {
        let store = InMemoryCatalogStore::new();
        store
            .insert_new(Product::register("bolt", "Bolt", "tools", 0.1).unwrap())
            .unwrap();
        store
            .insert_new(Product::register("bread", "Bread", "food", 1.2).unwrap())
            .unwrap();

        assert_eq!(store.list(None).len(), 2);
        let tools = store.list(Some("tools"));
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].id(), "bolt");
        assert!(store.list(Some("missing")).is_empty());
    }

    #[test]
    fn catalog_remove_reports_missing_documents() {
        let store = InMemoryCatalogStore::new();
        assert_eq!(store.remove("ghost").unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn warehouse_insert_starts_at_version_one() {
        let store = InMemoryWarehouseStore::new();
        let w = warehouse();
        let id = *w.id();

        store.insert(w).unwrap();
        let stored = store.get(id).unwrap();
        assert_eq!(stored.version, 1);
    }

    #[test]
    fn replace_bumps_version_and_stores_the_new_document() {
        let store = InMemoryWarehouseStore::new();
        let w = warehouse();
        let id = *w.id();
        store.insert(w).unwrap();

        let mut stored = store.get(id).unwrap();
        stored.document.add_stock("bolt", 5).unwrap();
        let new_version = store.replace(stored.version, stored.document).unwrap();

        assert_eq!(new_version, 2);
        let reread = store.get(id).unwrap();
        assert_eq!(reread.version, 2);
        assert_eq!(reread.document.entries().len(), 1);
    }

    #[test]
    fn replace_rejects_stale_version() {
        let store = InMemoryWarehouseStore::new();
        let w = warehouse();
        let id = *w.id();
        store.insert(w).unwrap();

        // Two readers take the same snapshot; the slower writer must lose.
        let first = store.get(id).unwrap();
        let second = store.get(id).unwrap();

        let mut doc = first.document;
        doc.add_stock("bolt", 5).unwrap();
        store.replace(first.version, doc).unwrap();

        let mut doc = second.document;
        doc.add_stock("bolt", 7).unwrap();
        let err = store.replace(second.version, doc).unwrap_err();
        assert!(matches!(err, StoreError::VersionConflict { expected: 1, found: 2 }));
    }

    #[test]
    fn replace_rejects_missing_document() {
        let store = InMemoryWarehouseStore::new();
        let err = store.replace(1, warehouse()).unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn remove_drops_the_whole_document() {
        let store = InMemoryWarehouseStore::new();
        let mut w = warehouse();
        w.add_stock("bolt", 5).unwrap();
        let id = *w.id();
        store.insert(w).unwrap();

        store.remove(id).unwrap();
        assert!(store.get(id).is_none());
        assert_eq!(store.remove(id).unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn clear_empties_both_collections() {
        let catalog = InMemoryCatalogStore::new();
        catalog
            .insert_new(Product::register("bolt", "Bolt", "tools", 0.1).unwrap())
            .unwrap();
        let warehouses = InMemoryWarehouseStore::new();
        warehouses.insert(warehouse()).unwrap();

        catalog.clear();
        warehouses.clear();
        assert!(catalog.list(None).is_empty());
        assert!(warehouses.list().is_empty());
    }
}
