//! Read-side aggregate computations over catalog and warehouse data.
//!
//! Nothing here is cached or stored: every aggregate is computed on demand
//! from current store contents, so there is no invalidation to get wrong.

pub mod stats;

pub use stats::{capacity_stats, category_counts, warehouse_value, CapacityStats, CategoryCount};
