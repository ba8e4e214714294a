//! Form payloads and their validation.
//!
//! Forms carry raw strings exactly as the widgets supply them. `parse()` is
//! the input-validation boundary: the store is never invoked with malformed
//! values, and every rejection is a [`DomainError::Validation`].

use serde::Deserialize;

use gadgetstore_catalog::{CatalogEntry, Category};
use gadgetstore_core::{DomainError, DomainResult};

/// The Add Product tab's submission.
#[derive(Debug, Clone, Deserialize)]
pub struct AddProductForm {
    pub product_type: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub quantity: String,
    pub special_attr: String,
}

impl AddProductForm {
    /// Validate the submission and build the entry to add.
    ///
    /// Trims every field; rejects empty fields, unknown product types,
    /// non-positive or malformed price/quantity.
    pub fn parse(&self) -> DomainResult<CatalogEntry> {
        let name = self.name.trim();
        let brand = self.brand.trim();
        let special_attr = self.special_attr.trim();

        if name.is_empty() || brand.is_empty() || special_attr.is_empty() {
            return Err(DomainError::validation("all fields must be filled"));
        }

        let category: Category = self.product_type.trim().parse()?;
        let price = self.price.trim().parse()?;
        let quantity = parse_positive_quantity(&self.quantity)?;

        CatalogEntry::new(category, name, brand, price, quantity, special_attr)
    }
}

/// The Sell Product tab's submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SellForm {
    pub product: String,
    pub quantity: String,
}

/// A validated sell request, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellRequest {
    pub name: String,
    pub amount: u32,
}

impl SellForm {
    pub fn parse(&self) -> DomainResult<SellRequest> {
        let name = self.product.trim();
        if name.is_empty() {
            return Err(DomainError::validation("no product selected"));
        }
        let amount = parse_positive_quantity(&self.quantity)?;
        Ok(SellRequest {
            name: name.to_string(),
            amount,
        })
    }
}

fn parse_positive_quantity(raw: &str) -> DomainResult<u32> {
    let quantity: u32 = raw.trim().parse().map_err(|_| {
        DomainError::validation(format!("quantity '{}' is not a valid number", raw.trim()))
    })?;
    if quantity == 0 {
        return Err(DomainError::validation("quantity must be a positive number"));
    }
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_add_form() -> AddProductForm {
        AddProductForm {
            product_type: "Pendrive".to_string(),
            name: "Ultra Flash Drive".to_string(),
            brand: "SanDisk".to_string(),
            price: "12.99".to_string(),
            quantity: "50".to_string(),
            special_attr: "64GB".to_string(),
        }
    }

    #[test]
    fn valid_form_builds_the_entry() {
        let entry = valid_add_form().parse().unwrap();
        assert_eq!(entry.name(), "Ultra Flash Drive");
        assert_eq!(entry.brand(), "SanDisk");
        assert_eq!(entry.price().to_string(), "$12.99");
        assert_eq!(entry.quantity(), 50);
        assert_eq!(entry.category(), Category::Pendrive);
        assert_eq!(entry.extra(), "64GB");
    }

    #[test]
    fn fields_are_trimmed() {
        let mut form = valid_add_form();
        form.name = "  Ultra Flash Drive  ".to_string();
        form.price = " 12.99 ".to_string();
        let entry = form.parse().unwrap();
        assert_eq!(entry.name(), "Ultra Flash Drive");
    }

    #[test]
    fn empty_fields_are_rejected() {
        for field in ["name", "brand", "special_attr"] {
            let mut form = valid_add_form();
            match field {
                "name" => form.name = "   ".to_string(),
                "brand" => form.brand = String::new(),
                _ => form.special_attr = " ".to_string(),
            }
            let err = form.parse().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{field}");
        }
    }

    #[test]
    fn unknown_product_type_is_rejected() {
        let mut form = valid_add_form();
        form.product_type = "Webcam".to_string();
        assert!(matches!(
            form.parse().unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn non_positive_price_and_quantity_are_rejected() {
        for (price, quantity) in [("0", "50"), ("-3", "50"), ("abc", "50"), ("12.99", "0"), ("12.99", "-2"), ("12.99", "ten")] {
            let mut form = valid_add_form();
            form.price = price.to_string();
            form.quantity = quantity.to_string();
            assert!(
                matches!(form.parse().unwrap_err(), DomainError::Validation(_)),
                "price={price} quantity={quantity}"
            );
        }
    }

    #[test]
    fn sell_form_parses_selection_and_amount() {
        let form = SellForm {
            product: "Phone Stand".to_string(),
            quantity: "3".to_string(),
        };
        assert_eq!(
            form.parse().unwrap(),
            SellRequest {
                name: "Phone Stand".to_string(),
                amount: 3
            }
        );
    }

    #[test]
    fn sell_form_rejects_empty_selection_and_bad_amounts() {
        let no_selection = SellForm {
            product: "  ".to_string(),
            quantity: "3".to_string(),
        };
        assert!(no_selection.parse().is_err());

        for quantity in ["0", "-1", ""] {
            let form = SellForm {
                product: "Phone Stand".to_string(),
                quantity: quantity.to_string(),
            };
            assert!(form.parse().is_err(), "quantity={quantity}");
        }
    }
}
