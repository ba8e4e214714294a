//! Money value object.
//!
//! Prices are stored in whole cents (smallest currency unit), never floating
//! point, so equality and arithmetic are exact.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A price in whole cents.
///
/// Displays as `$12.99` (two fraction digits, always). Parsing accepts a
/// plain decimal string with at most two fraction digits and rejects
/// non-positive values; `CatalogEntry` relies on that to keep its
/// `price > 0` invariant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::validation("price cannot be empty"));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        if !whole.chars().all(|c| c.is_ascii_digit()) || whole.is_empty() {
            return Err(DomainError::validation(format!(
                "price '{s}' is not a valid decimal number"
            )));
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "price '{s}' must have at most two fraction digits"
            )));
        }

        let dollars: u64 = whole
            .parse()
            .map_err(|_| DomainError::validation(format!("price '{s}' is out of range")))?;

        // "5.5" means 5 dollars 50 cents, not 5 dollars 5 cents.
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().unwrap_or(0) * 10,
            _ => frac.parse::<u64>().unwrap_or(0),
        };

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(|| DomainError::validation(format!("price '{s}' is out of range")))?;

        if cents == 0 {
            return Err(DomainError::validation("price must be positive"));
        }

        Ok(Self(cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_fraction_digits() {
        let price: Price = "12.99".parse().unwrap();
        assert_eq!(price.cents(), 1299);
    }

    #[test]
    fn parses_whole_dollars() {
        let price: Price = "25".parse().unwrap();
        assert_eq!(price.cents(), 2500);
    }

    #[test]
    fn single_fraction_digit_means_tens_of_cents() {
        let price: Price = "5.5".parse().unwrap();
        assert_eq!(price.cents(), 550);
    }

    #[test]
    fn displays_with_dollar_sign_and_two_digits() {
        assert_eq!(Price::from_cents(1299).to_string(), "$12.99");
        assert_eq!(Price::from_cents(999).to_string(), "$9.99");
        assert_eq!(Price::from_cents(1000).to_string(), "$10.00");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn rejects_zero() {
        let err = "0".parse::<Price>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!("0.00".parse::<Price>().is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
        assert!("-5".parse::<Price>().is_err());
        assert!("12.999".parse::<Price>().is_err());
        assert!("1.2.3".parse::<Price>().is_err());
        assert!("1e3".parse::<Price>().is_err());
    }

    #[test]
    fn round_trips_through_display() {
        let price: Price = "12.99".parse().unwrap();
        let again: Price = price.to_string().trim_start_matches('$').parse().unwrap();
        assert_eq!(price, again);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any positive cent amount survives display-then-parse.
            #[test]
            fn display_parse_round_trip(cents in 1u64..10_000_000) {
                let price = Price::from_cents(cents);
                let rendered = price.to_string();
                prop_assert!(rendered.starts_with('$'));
                let parsed: Price = rendered[1..].parse().unwrap();
                prop_assert_eq!(parsed, price);
            }
        }
    }
}
