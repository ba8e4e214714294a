//! `gadgetstore-desktop`
//!
//! **Responsibility:** the tabbed desktop shell around the inventory store.
//!
//! This crate provides:
//! - Form parsing/validation (malformed input never reaches the store)
//! - View-model rows for the inventory table
//! - Tauri commands wiring the forms to the store (feature `tauri`)
//!
//! The shell owns no business rules; every decision lives in
//! `gadgetstore-catalog` and `gadgetstore-inventory`.

pub mod forms;
pub mod types;

#[cfg(feature = "tauri")]
pub mod commands;

pub use forms::{AddProductForm, SellForm, SellRequest};
pub use types::ProductRow;
