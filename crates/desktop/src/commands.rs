//! Tauri commands for frontend integration.
//!
//! Each command maps a submitted form to one store operation and turns the
//! outcome into the dialog message the frontend shows. All mutation goes
//! through the single `AppState` store; the event loop serializes calls.

use std::sync::Mutex;

use tauri::State;

use gadgetstore_inventory::InventoryStore;

use crate::forms::{AddProductForm, SellForm};
use crate::types::ProductRow;

/// Application state shared across Tauri commands.
///
/// The mutex is Tauri's state-sharing requirement, not a concurrency
/// feature: the store is only ever driven by the UI thread.
pub struct AppState {
    inventory: Mutex<InventoryStore>,
}

impl AppState {
    pub fn new(inventory: InventoryStore) -> Self {
        Self {
            inventory: Mutex::new(inventory),
        }
    }
}

fn lock_inventory(state: &AppState) -> Result<std::sync::MutexGuard<'_, InventoryStore>, String> {
    state
        .inventory
        .lock()
        .map_err(|_| "inventory state is unavailable".to_string())
}

/// Add a product from the Add Product tab.
#[tauri::command]
pub fn add_product(form: AddProductForm, state: State<'_, AppState>) -> Result<String, String> {
    let entry = form.parse().map_err(|e| e.to_string())?;
    let product_type = entry.category();
    let name = entry.name().to_string();

    let mut inventory = lock_inventory(&state)?;
    inventory.add(entry).map_err(|e| {
        tracing::warn!(%name, "rejected duplicate product");
        e.to_string()
    })?;

    tracing::info!(%name, %product_type, "product added");
    Ok(format!("{product_type} '{name}' added to inventory!"))
}

/// Sell units from the Sell Product tab.
#[tauri::command]
pub fn sell_product(form: SellForm, state: State<'_, AppState>) -> Result<String, String> {
    let request = form.parse().map_err(|e| e.to_string())?;

    let mut inventory = lock_inventory(&state)?;
    let remaining = inventory
        .sell(&request.name, request.amount)
        .map_err(|e| {
            tracing::warn!(name = %request.name, amount = request.amount, "sell rejected: {e}");
            e.to_string()
        })?;

    tracing::info!(name = %request.name, amount = request.amount, remaining, "units sold");
    Ok(format!(
        "Successfully sold {} of {}",
        request.amount, request.name
    ))
}

/// All rows for the View Inventory tab, in insertion order.
#[tauri::command]
pub fn list_inventory(state: State<'_, AppState>) -> Result<Vec<ProductRow>, String> {
    let inventory = lock_inventory(&state)?;
    Ok(inventory.iter().map(ProductRow::from).collect())
}

/// Current product names, in insertion order (Sell tab dropdown).
#[tauri::command]
pub fn product_names(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    let inventory = lock_inventory(&state)?;
    Ok(inventory.names().into_iter().map(str::to_string).collect())
}
