use serde::Deserialize;

use stockroom_analytics::{CapacityStats, CategoryCount};
use stockroom_catalog::Product;
use stockroom_core::Entity;
use stockroom_warehouse::{InventoryEntry, Warehouse};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterProductRequest {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct RegisterWarehouseRequest {
    pub name: String,
    pub location: String,
    pub capacity: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddStockRequest {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------
//
// Wire field names stay camelCase; list endpoints return bare arrays.

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id(),
        "name": product.name(),
        "category": product.category(),
        "price": product.price(),
    })
}

pub fn warehouse_to_json(warehouse: &Warehouse) -> serde_json::Value {
    serde_json::json!({
        "id": warehouse.id().to_string(),
        "name": warehouse.name(),
        "location": warehouse.location(),
        "capacity": warehouse.capacity(),
    })
}

pub fn entry_to_json(entry: &InventoryEntry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id().to_string(),
        "productId": entry.product_id(),
        "quantity": entry.quantity(),
    })
}

pub fn capacity_stats_to_json(stats: &CapacityStats) -> serde_json::Value {
    serde_json::json!({
        "totalCapacity": stats.total_capacity,
        "usedCapacity": stats.used_capacity,
        "freeCapacity": stats.free_capacity,
    })
}

pub fn category_count_to_json(count: &CategoryCount) -> serde_json::Value {
    serde_json::json!({
        "category": count.category,
        "count": count.count,
    })
}
