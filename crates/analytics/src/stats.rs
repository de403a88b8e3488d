use std::collections::HashMap;

use stockroom_catalog::Product;
use stockroom_warehouse::Warehouse;

/// Capacity utilization across all warehouses.
///
/// `used_capacity` counts raw stock units; quantities are compared against
/// capacity as bare numbers, so `free_capacity` can go negative when a
/// warehouse holds more units than its nominal capacity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CapacityStats {
    pub total_capacity: u64,
    pub used_capacity: u64,
    pub free_capacity: i64,
}

impl CapacityStats {
    pub fn zero() -> Self {
        Self {
            total_capacity: 0,
            used_capacity: 0,
            free_capacity: 0,
        }
    }
}

/// Number of catalog products in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Total value of a warehouse's stock: Σ price × quantity, rounded to two
/// decimal places.
///
/// `price_of` resolves a product id against the catalog. Entries whose
/// product no longer resolves are join misses, skipped rather than treated
/// as errors (product deletion does not cascade into ledgers).
pub fn warehouse_value<F>(warehouse: &Warehouse, price_of: F) -> f64
where
    F: Fn(&str) -> Option<f64>,
{
    let raw: f64 = warehouse
        .entries()
        .iter()
        .filter_map(|entry| price_of(entry.product_id()).map(|price| price * entry.quantity() as f64))
        .sum();

    (raw * 100.0).round() / 100.0
}

/// Capacity statistics over every warehouse. All-zero when none exist.
pub fn capacity_stats<'a, I>(warehouses: I) -> CapacityStats
where
    I: IntoIterator<Item = &'a Warehouse>,
{
    let mut stats = CapacityStats::zero();
    for warehouse in warehouses {
        stats.total_capacity += warehouse.capacity();
        stats.used_capacity += warehouse.stocked_units();
    }
    stats.free_capacity = stats.total_capacity as i64 - stats.used_capacity as i64;
    stats
}

/// Group catalog products by category and count members. Order unspecified.
pub fn category_counts<'a, I>(products: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for product in products {
        *counts.entry(product.category()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect()
}
