//! Warehouse registry and inventory ledger domain module.
//!
//! This crate contains business rules for warehouses and their embedded
//! stock ledgers, implemented purely as deterministic domain logic (no IO,
//! no HTTP, no storage).

pub mod warehouse;

pub use warehouse::{InventoryEntry, Warehouse};
