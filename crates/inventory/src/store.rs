//! In-memory inventory store.

use serde::{Deserialize, Serialize};

use gadgetstore_catalog::{CatalogEntry, Category};
use gadgetstore_core::{DomainError, DomainResult, Entity};

/// Name-keyed registry of catalog entries, in insertion order.
///
/// A `Vec` with linear name lookup: insertion order *is* the display order,
/// and the store holds a handful of entries. The name check is exact —
/// case- and whitespace-sensitive, no normalization.
///
/// Single-owner state: create one at startup and pass it to whatever drives
/// it. There is no delete operation; entries live until the store is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStore {
    entries: Vec<CatalogEntry>,
}

impl InventoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with the demo products.
    pub fn sample() -> Self {
        let mut store = Self::new();
        let samples = [
            (Category::Pendrive, "Ultra Flash Drive", "SanDisk", 1299, 50, "64GB"),
            (Category::Ringlight, "Pro Ring Light", "Neewer", 4999, 20, "3000K-6000K"),
            (Category::Tripod, "Compact Tripod", "Amazon Basics", 2499, 30, "60 inches"),
            (Category::Stabilizer, "Smartphone Gimbal", "DJI", 9999, 15, "Smartphones"),
            (Category::Standie, "Phone Stand", "Lamicall", 999, 40, "Aluminum"),
        ];
        for (category, name, brand, cents, quantity, extra) in samples {
            // Fixed, known-valid data; a failure here is a bug in the seed itself.
            let seeded = CatalogEntry::new(
                category,
                name,
                brand,
                gadgetstore_core::Price::from_cents(cents),
                quantity,
                extra,
            )
            .and_then(|entry| store.add(entry));
            debug_assert!(seeded.is_ok(), "sample data must be valid");
        }
        store
    }

    /// Add an entry.
    ///
    /// Fails with [`DomainError::DuplicateName`] if an entry with the exact
    /// same name exists; the original entry is retained unchanged.
    pub fn add(&mut self, entry: CatalogEntry) -> DomainResult<()> {
        if self.get(entry.name()).is_some() {
            return Err(DomainError::duplicate_name(entry.name()));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Sell `amount` units of the named product.
    ///
    /// Fails with [`DomainError::UnknownProduct`] if the name is absent;
    /// otherwise delegates to the entry and forwards its result (remaining
    /// quantity on success).
    pub fn sell(&mut self, name: &str, amount: u32) -> DomainResult<u32> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| DomainError::unknown_product(name))?;
        entry.sell(amount)
    }

    /// Display fields for every entry, in insertion order. Pure read.
    pub fn list(&self) -> Vec<Vec<(&'static str, String)>> {
        self.entries.iter().map(CatalogEntry::describe).collect()
    }

    /// Entry names in insertion order (the sell form's selection list).
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(CatalogEntry::name).collect()
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
