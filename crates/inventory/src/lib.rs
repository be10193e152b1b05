//! Inventory domain module.
//!
//! This crate contains the in-memory stock mapping and its business rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod store;

pub use store::InventoryStore;
