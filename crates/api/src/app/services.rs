use std::sync::Arc;

use stockroom_analytics::{CapacityStats, CategoryCount};
use stockroom_catalog::Product;
use stockroom_core::{DomainError, DomainResult, Entity, EntryId, WarehouseId};
use stockroom_infra::store::{
    CatalogStore, InMemoryCatalogStore, InMemoryWarehouseStore, StoreError, WarehouseStore,
};
use stockroom_warehouse::{InventoryEntry, Warehouse};

/// Bound on the versioned-replace retry loop. Every failed attempt means
/// some other writer succeeded, so the bound is only reachable under
/// sustained contention on one warehouse; it exists to keep the operation
/// from spinning forever rather than as something callers should ever see.
const MAX_REPLACE_ATTEMPTS: usize = 100;

/// Store handles plus every operation the routes expose.
///
/// Each method is one logical operation against the stores; ledger mutations
/// run a read-modify-replace cycle guarded by the document version so
/// concurrent restocks of the same warehouse cannot lose updates.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<dyn CatalogStore>,
    warehouses: Arc<dyn WarehouseStore>,
}

/// In-memory store wiring (the only backend shipped; production document
/// stores plug in behind the same traits).
pub fn build_services() -> AppServices {
    AppServices::new(
        Arc::new(InMemoryCatalogStore::new()),
        Arc::new(InMemoryWarehouseStore::new()),
    )
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogStore>, warehouses: Arc<dyn WarehouseStore>) -> Self {
        Self {
            catalog,
            warehouses,
        }
    }

    // ----- product catalog -----

    pub fn register_product(
        &self,
        id: String,
        name: String,
        category: String,
        price: f64,
    ) -> DomainResult<String> {
        let product = Product::register(id, name, category, price)?;
        let id = product.id().clone();

        match self.catalog.insert_new(product) {
            Ok(()) => {
                tracing::info!(product_id = %id, "product registered");
                Ok(id)
            }
            Err(StoreError::DuplicateKey(_)) => {
                Err(DomainError::conflict("product with this id already exists"))
            }
            Err(e) => Err(store_failure(e)),
        }
    }

    pub fn list_products(&self, category: Option<&str>) -> Vec<Product> {
        self.catalog.list(category)
    }

    pub fn get_product(&self, id: &str) -> DomainResult<Product> {
        self.catalog.get(id).ok_or(DomainError::NotFound)
    }

    /// Delete a product. Warehouse ledgers referencing it are left alone:
    /// dangling references are tolerated and skipped by value computation.
    pub fn delete_product(&self, id: &str) -> DomainResult<()> {
        match self.catalog.remove(id) {
            Ok(()) => {
                tracing::info!(product_id = %id, "product deleted");
                Ok(())
            }
            Err(StoreError::NotFound) => Err(DomainError::NotFound),
            Err(e) => Err(store_failure(e)),
        }
    }

    // ----- warehouse registry -----

    pub fn register_warehouse(
        &self,
        name: String,
        location: String,
        capacity: i64,
    ) -> DomainResult<WarehouseId> {
        let warehouse = Warehouse::register(name, location, capacity)?;
        let id = *warehouse.id();

        match self.warehouses.insert(warehouse) {
            Ok(()) => {
                tracing::info!(warehouse_id = %id, "warehouse registered");
                Ok(id)
            }
            Err(e) => Err(store_failure(e)),
        }
    }

    pub fn get_warehouse(&self, id: WarehouseId) -> DomainResult<Warehouse> {
        self.warehouses
            .get(id)
            .map(|v| v.document)
            .ok_or(DomainError::NotFound)
    }

    /// Delete a warehouse document. Its ledger entries go with it; they
    /// have no existence outside their warehouse.
    pub fn delete_warehouse(&self, id: WarehouseId) -> DomainResult<()> {
        match self.warehouses.remove(id) {
            Ok(()) => {
                tracing::info!(warehouse_id = %id, "warehouse deleted");
                Ok(())
            }
            Err(StoreError::NotFound) => Err(DomainError::NotFound),
            Err(e) => Err(store_failure(e)),
        }
    }

    // ----- inventory ledger -----

    /// Merge stock into a warehouse's ledger.
    ///
    /// Check order is part of the contract: quantity first (`Validation`),
    /// then product existence, then warehouse existence (both `NotFound`).
    /// The product check and the ledger write are deliberately not joined in
    /// a transaction; a product deleted in between is a tolerated race.
    pub fn add_stock(
        &self,
        warehouse_id: WarehouseId,
        product_id: &str,
        quantity: i64,
    ) -> DomainResult<EntryId> {
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be a positive integer"));
        }
        if self.catalog.get(product_id).is_none() {
            return Err(DomainError::NotFound);
        }

        let entry_id =
            self.update_warehouse(warehouse_id, |w| w.add_stock(product_id, quantity))?;
        tracing::info!(%warehouse_id, product_id, quantity, entry_id = %entry_id, "stock added");
        Ok(entry_id)
    }

    /// All ledger entries of one warehouse. An existing warehouse with an
    /// empty ledger yields an empty list, not `NotFound`.
    pub fn list_inventory(&self, warehouse_id: WarehouseId) -> DomainResult<Vec<InventoryEntry>> {
        Ok(self.get_warehouse(warehouse_id)?.entries().to_vec())
    }

    pub fn get_inventory_entry(
        &self,
        warehouse_id: WarehouseId,
        entry_id: EntryId,
    ) -> DomainResult<InventoryEntry> {
        self.get_warehouse(warehouse_id)?
            .entry(entry_id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    pub fn remove_inventory_entry(
        &self,
        warehouse_id: WarehouseId,
        entry_id: EntryId,
    ) -> DomainResult<()> {
        self.update_warehouse(warehouse_id, |w| w.remove_entry(entry_id))?;
        tracing::info!(%warehouse_id, entry_id = %entry_id, "inventory entry removed");
        Ok(())
    }

    // ----- aggregates -----

    pub fn warehouse_value(&self, warehouse_id: WarehouseId) -> DomainResult<f64> {
        let warehouse = self.get_warehouse(warehouse_id)?;
        Ok(stockroom_analytics::warehouse_value(&warehouse, |id| {
            self.catalog.get(id).map(|p| p.price())
        }))
    }

    pub fn capacity_statistics(&self) -> CapacityStats {
        let warehouses = self.warehouses.list();
        stockroom_analytics::capacity_stats(&warehouses)
    }

    pub fn product_counts_by_category(&self) -> Vec<CategoryCount> {
        let products = self.catalog.list(None);
        stockroom_analytics::category_counts(&products)
    }

    // ----- admin -----

    /// Clear both collections. Always succeeds.
    pub fn reset(&self) {
        self.catalog.clear();
        self.warehouses.clear();
        tracing::info!("store reset");
    }

    /// Read-modify-replace with optimistic concurrency: reload the document
    /// and retry when another writer got in between. Domain errors from the
    /// mutation abort immediately; nothing has been written at that point.
    fn update_warehouse<T>(
        &self,
        id: WarehouseId,
        mutate: impl Fn(&mut Warehouse) -> DomainResult<T>,
    ) -> DomainResult<T> {
        for _ in 0..MAX_REPLACE_ATTEMPTS {
            let stored = self.warehouses.get(id).ok_or(DomainError::NotFound)?;
            let mut warehouse = stored.document;

            let out = mutate(&mut warehouse)?;

            match self.warehouses.replace(stored.version, warehouse) {
                Ok(_) => return Ok(out),
                Err(StoreError::VersionConflict { .. }) => {
                    tracing::debug!(warehouse_id = %id, "stale document version, retrying");
                    continue;
                }
                Err(StoreError::NotFound) => return Err(DomainError::NotFound),
                Err(e) => return Err(store_failure(e)),
            }
        }

        Err(DomainError::conflict("warehouse update contention"))
    }
}

fn store_failure(err: StoreError) -> DomainError {
    tracing::error!(error = %err, "store operation failed");
    DomainError::conflict(err.to_string())
}
