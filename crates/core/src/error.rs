//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic business-rule rejection. Nothing here is
/// fatal; the presentation layer turns each into a user-visible message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed or empty input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Add was attempted with a name the store already holds.
    #[error("a product named '{0}' already exists")]
    DuplicateName(String),

    /// Sell was attempted against a name the store does not hold.
    #[error("no product named '{0}'")]
    UnknownProduct(String),

    /// Sell was attempted for more units than are in stock.
    ///
    /// Carries the current quantity so the caller can report the shortfall
    /// without reading the store again.
    #[error("insufficient stock: requested {requested}, only {available} available")]
    InsufficientStock { requested: u32, available: u32 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn unknown_product(name: impl Into<String>) -> Self {
        Self::UnknownProduct(name.into())
    }

    pub fn insufficient_stock(requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }
}
