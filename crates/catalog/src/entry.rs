//! Catalog entry: one product record.

use serde::{Deserialize, Serialize};

use gadgetstore_core::{DomainError, DomainResult, Entity, Price};

use crate::category::Category;

/// One product tracked by the store.
///
/// `name` is the identity; `quantity` only ever moves through [`sell`] and is
/// monotonically non-increasing after construction. There is no other
/// mutation.
///
/// [`sell`]: CatalogEntry::sell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    name: String,
    brand: String,
    price: Price,
    quantity: u32,
    category: Category,
    extra: String,
}

impl CatalogEntry {
    /// Create a validated entry.
    ///
    /// Rejects blank `name`/`brand`/`extra` and a zero price. A zero
    /// `quantity` is allowed here; the add form rejects it before
    /// construction.
    pub fn new(
        category: Category,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Price,
        quantity: u32,
        extra: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let brand = brand.into();
        let extra = extra.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if brand.trim().is_empty() {
            return Err(DomainError::validation("brand cannot be empty"));
        }
        if extra.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "{} cannot be empty",
                category.extra_label()
            )));
        }
        if price.cents() == 0 {
            return Err(DomainError::validation("price must be positive"));
        }

        Ok(Self {
            name,
            brand,
            price,
            quantity,
            category,
            extra,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn extra(&self) -> &str {
        &self.extra
    }

    /// Ordered display fields: Name, Brand, Price, Quantity, then the
    /// category-specific field under its category label. Pure.
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Brand", self.brand.clone()),
            ("Price", self.price.to_string()),
            ("Quantity", self.quantity.to_string()),
            (self.category.extra_label(), self.extra.clone()),
        ]
    }

    /// Sell `amount` units.
    ///
    /// Returns the remaining quantity on success. A zero amount is rejected
    /// as validation; an amount above the current stock is rejected as
    /// insufficient stock. Neither failure changes state.
    pub fn sell(&mut self, amount: u32) -> DomainResult<u32> {
        if amount == 0 {
            return Err(DomainError::validation("quantity must be a positive number"));
        }
        if amount > self.quantity {
            return Err(DomainError::insufficient_stock(amount, self.quantity));
        }
        self.quantity -= amount;
        Ok(self.quantity)
    }
}

impl Entity for CatalogEntry {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
