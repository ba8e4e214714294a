//! Tauri application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri")]
fn main() {
    use gadgetstore_desktop::commands::{
        AppState, add_product, list_inventory, product_names, sell_product,
    };
    use gadgetstore_inventory::InventoryStore;

    gadgetstore_observability::init();

    tracing::info!("starting gadget store inventory with sample products");
    let state = AppState::new(InventoryStore::sample());

    tauri::Builder::default()
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            add_product,
            sell_product,
            list_inventory,
            product_names,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(not(feature = "tauri"))]
fn main() {
    eprintln!("This binary requires the 'tauri' feature to be enabled.");
    eprintln!("Build with: cargo build --features tauri");
    std::process::exit(1);
}
