//! Expense identifiers
//!
//! Identifiers are opaque strings. New expenses get a random UUID, while
//! seed data and previously stored records may carry any non-empty string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque, immutable identifier of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the identifier is blank
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Short form used in tables: UUIDs are cut to their first 8 characters
    pub fn short(&self) -> &str {
        if Uuid::parse_str(&self.0).is_ok() {
            &self.0[..8]
        } else {
            &self.0
        }
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ExpenseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for ExpenseId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_uuids() {
        let id = ExpenseId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, ExpenseId::new());
    }

    #[test]
    fn test_short_form() {
        let id = ExpenseId::from("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(id.short(), "550e8400");

        let seed = ExpenseId::from("seed-1");
        assert_eq!(seed.short(), "seed-1");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ExpenseId::from("seed-3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"seed-3\"");

        let back: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_parse_trims() {
        let id: ExpenseId = "  seed-2 ".parse().unwrap();
        assert_eq!(id.as_str(), "seed-2");
        assert!(!id.is_blank());
        assert!(ExpenseId::from("   ").is_blank());
    }
}
