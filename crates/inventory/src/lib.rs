//! Inventory domain module.
//!
//! This crate contains the in-memory inventory store, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod store;

pub use store::InventoryStore;
