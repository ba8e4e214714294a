//! Product categories.
//!
//! The category set is closed. Each category carries exactly one extra
//! descriptive field; the label (and the add-form prompt) for that field is
//! looked up here rather than modelled as a subtype hierarchy.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gadgetstore_core::DomainError;

/// Product category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pendrive,
    Ringlight,
    Tripod,
    Stabilizer,
    Standie,
}

impl Category {
    /// All categories, in the order the add form offers them.
    pub const ALL: [Category; 5] = [
        Category::Pendrive,
        Category::Ringlight,
        Category::Tripod,
        Category::Stabilizer,
        Category::Standie,
    ];

    /// Display label for the category-specific extra field.
    pub fn extra_label(&self) -> &'static str {
        match self {
            Category::Pendrive => "Size",
            Category::Ringlight => "Color Temperature",
            Category::Tripod => "Max Height",
            Category::Stabilizer => "Compatible Devices",
            Category::Standie => "Material",
        }
    }

    /// Add-form prompt for the extra field, with an example where one helps.
    pub fn extra_prompt(&self) -> &'static str {
        match self {
            Category::Pendrive => "Size (e.g., 16GB):",
            Category::Ringlight => "Color Temp (e.g., 3000K-6000K):",
            Category::Tripod => "Max Height (e.g., 60 inches):",
            Category::Stabilizer => "Compatible Devices:",
            Category::Standie => "Material:",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pendrive => "Pendrive",
            Category::Ringlight => "Ringlight",
            Category::Tripod => "Tripod",
            Category::Stabilizer => "Stabilizer",
            Category::Standie => "Standie",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pendrive" => Ok(Category::Pendrive),
            "Ringlight" => Ok(Category::Ringlight),
            "Tripod" => Ok(Category::Tripod),
            "Stabilizer" => Ok(Category::Stabilizer),
            "Standie" => Ok(Category::Standie),
            other => Err(DomainError::validation(format!(
                "unknown product type '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_labels_match_categories() {
        assert_eq!(Category::Pendrive.extra_label(), "Size");
        assert_eq!(Category::Ringlight.extra_label(), "Color Temperature");
        assert_eq!(Category::Tripod.extra_label(), "Max Height");
        assert_eq!(Category::Stabilizer.extra_label(), "Compatible Devices");
        assert_eq!(Category::Standie.extra_label(), "Material");
    }

    #[test]
    fn parses_every_display_name() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "Webcam".parse::<Category>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
