//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added
    Create,
    /// Expense was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Expenses are immutable, so a snapshot of the record is enough to
/// describe both operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected expense
    pub expense_id: String,

    /// Title of the affected expense
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// JSON representation of the expense at the time of the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<serde_json::Value>,
}

impl AuditEntry {
    fn for_expense(operation: Operation, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            expense_id: expense.id.to_string(),
            title: Some(expense.title.clone()),
            snapshot: serde_json::to_value(expense).ok(),
        }
    }

    /// Create an audit entry for an added expense
    pub fn create(expense: &Expense) -> Self {
        Self::for_expense(Operation::Create, expense)
    }

    /// Create an audit entry for a removed expense
    pub fn delete(expense: &Expense) -> Self {
        Self::for_expense(Operation::Delete, expense)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_id
        );

        if let Some(title) = &self.title {
            output.push_str(&format!(" ({})", title));
        }

        if let Some(amount) = self.snapshot.as_ref().and_then(|s| s.get("amount")) {
            output.push_str(&format!(" amount={}", amount));
        }

        output
    }
}
