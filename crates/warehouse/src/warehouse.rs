use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, EntryId, WarehouseId};

/// One (product, quantity) pairing within a warehouse's ledger.
///
/// Entries are owned exclusively by their warehouse and have no existence
/// outside it. `quantity` is strictly positive: an entry that would reach
/// zero is removed instead of being kept around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    id: EntryId,
    product_id: String,
    quantity: u64,
}

impl InventoryEntry {
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

impl Entity for InventoryEntry {
    type Id = EntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Warehouse document: registry record plus the embedded inventory ledger.
///
/// Ledger invariant: at most one entry per product id. Restocking an already
/// stocked product merges into the existing entry (its id is preserved)
/// rather than appending a second one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    id: WarehouseId,
    name: String,
    location: String,
    capacity: u64,
    registered_at: DateTime<Utc>,
    inventory: Vec<InventoryEntry>,
}

impl Warehouse {
    /// Validate caller input and build a warehouse with an empty ledger.
    ///
    /// Capacity is stored as given; there is no check against current stock
    /// (stock starts empty, and later restocks are never capacity-bounded).
    pub fn register(
        name: impl Into<String>,
        location: impl Into<String>,
        capacity: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        let location = location.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if location.trim().is_empty() {
            return Err(DomainError::validation("location cannot be empty"));
        }
        if capacity < 0 {
            return Err(DomainError::validation("capacity must be a non-negative integer"));
        }

        Ok(Self {
            id: WarehouseId::new(),
            name,
            location,
            capacity: capacity as u64,
            registered_at: Utc::now(),
            inventory: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// All ledger entries, in insertion order.
    pub fn entries(&self) -> &[InventoryEntry] {
        &self.inventory
    }

    pub fn entry(&self, entry_id: EntryId) -> Option<&InventoryEntry> {
        self.inventory.iter().find(|e| *e.id() == entry_id)
    }

    /// Total stock units across the ledger (raw units, not normalized
    /// against capacity).
    pub fn stocked_units(&self) -> u64 {
        self.inventory.iter().map(|e| e.quantity).sum()
    }

    /// Merge stock into the ledger.
    ///
    /// If an entry for `product_id` already exists its quantity is
    /// incremented in place and its id returned; otherwise a fresh entry is
    /// appended. Product existence against the catalog is the caller's check;
    /// this method only guards the ledger's own invariants.
    pub fn add_stock(&mut self, product_id: &str, quantity: i64) -> DomainResult<EntryId> {
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be a positive integer"));
        }
        let quantity = quantity as u64;

        if let Some(entry) = self
            .inventory
            .iter_mut()
            .find(|e| e.product_id == product_id)
        {
            entry.quantity = entry.quantity.saturating_add(quantity);
            return Ok(entry.id);
        }

        let entry = InventoryEntry {
            id: EntryId::new(),
            product_id: product_id.to_string(),
            quantity,
        };
        let id = entry.id;
        self.inventory.push(entry);
        Ok(id)
    }

    /// Remove one entry wholesale. There is no quantity-decrement variant.
    pub fn remove_entry(&mut self, entry_id: EntryId) -> DomainResult<()> {
        let before = self.inventory.len();
        self.inventory.retain(|e| e.id != entry_id);
        if self.inventory.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}

impl Entity for Warehouse {
    type Id = WarehouseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
