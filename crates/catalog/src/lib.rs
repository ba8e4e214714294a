//! Catalog domain module.
//!
//! This crate contains the product catalog types: the closed category set and
//! the catalog entry, implemented purely as deterministic domain logic (no IO,
//! no HTTP, no storage).

pub mod category;
pub mod entry;

pub use category::Category;
pub use entry::CatalogEntry;
