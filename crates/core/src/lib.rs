//! `gadgetstore-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod price;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use price::Price;
pub use value_object::ValueObject;
