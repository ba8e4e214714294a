//! View-model types shared with the frontend.

use serde::Serialize;

use gadgetstore_catalog::CatalogEntry;

/// One row of the View Inventory table.
///
/// `details` is the comma-joined rendering of the fields beyond
/// Name/Brand/Price/Quantity — for this catalog, the single
/// category-specific field as `"<Label>: <value>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub name: String,
    pub brand: String,
    pub price: String,
    pub quantity: u32,
    pub details: String,
}

impl From<&CatalogEntry> for ProductRow {
    fn from(entry: &CatalogEntry) -> Self {
        let details = entry
            .describe()
            .into_iter()
            .skip(4) // Name, Brand, Price, Quantity
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            name: entry.name().to_string(),
            brand: entry.brand().to_string(),
            price: entry.price().to_string(),
            quantity: entry.quantity(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gadgetstore_catalog::Category;
    use gadgetstore_core::Price;

    #[test]
    fn row_renders_price_and_details() {
        let entry = CatalogEntry::new(
            Category::Ringlight,
            "Pro Ring Light",
            "Neewer",
            Price::from_cents(4999),
            20,
            "3000K-6000K",
        )
        .unwrap();

        let row = ProductRow::from(&entry);
        assert_eq!(row.brand, "Neewer");
        assert_eq!(row.price, "$49.99");
        assert_eq!(row.quantity, 20);
        assert_eq!(row.details, "Color Temperature: 3000K-6000K");
    }

    #[test]
    fn row_serializes_to_the_frontend_payload_shape() {
        let entry = CatalogEntry::new(
            Category::Pendrive,
            "Ultra Flash Drive",
            "SanDisk",
            Price::from_cents(1299),
            50,
            "64GB",
        )
        .unwrap();

        let payload = serde_json::to_value(ProductRow::from(&entry)).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "name": "Ultra Flash Drive",
                "brand": "SanDisk",
                "price": "$12.99",
                "quantity": 50,
                "details": "Size: 64GB",
            })
        );
    }
}
