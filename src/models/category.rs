//! Expense categories
//!
//! The category set is fixed; user input is matched case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Spending category of an expense
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Category {
    #[default]
    Food,
    Housing,
    Transportation,
    Entertainment,
    Health,
    Shopping,
    Utilities,
    Other,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Housing,
            Self::Transportation,
            Self::Entertainment,
            Self::Health,
            Self::Shopping,
            Self::Utilities,
            Self::Other,
        ]
    }

    /// Get the display name of this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Shopping => "Shopping",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CategoryParseError(needle.to_string()))
    }
}

/// Error returned when a category name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}' (expected one of: Food, Housing, Transportation, Entertainment, Health, Shopping, Utilities, Other)")]
pub struct CategoryParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_eight_categories() {
        assert_eq!(Category::all().len(), 8);
        assert_eq!(Category::all()[0], Category::Food);
        assert_eq!(Category::all()[7], Category::Other);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" UTILITIES ".parse::<Category>().unwrap(), Category::Utilities);
        assert!("Groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Category::Transportation).unwrap();
        assert_eq!(json, "\"Transportation\"");

        let back: Category = serde_json::from_str("\"Health\"").unwrap();
        assert_eq!(back, Category::Health);

        assert!(serde_json::from_str::<Category>("\"Pets\"").is_err());
    }

    #[test]
    fn test_display_matches_name() {
        for category in Category::all() {
            assert_eq!(category.to_string(), category.name());
        }
    }
}
