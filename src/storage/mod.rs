//! Storage layer for Expense Flow
//!
//! Provides the JSON-slot backed expense store, atomic file writes and the
//! fallback seed data.

pub mod expenses;
pub mod file_io;
pub mod seed;

pub use expenses::ExpenseStore;
pub use file_io::{read_optional, write_json_atomic};
pub use seed::seed_expenses;

use chrono::NaiveDate;

use crate::audit::AuditLogger;
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseError;

/// Main storage coordinator wiring the store to its paths and audit log
#[derive(Debug)]
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseStore,
}

impl Storage {
    /// Open the expense slot under `paths`
    pub fn open(
        paths: ExpensePaths,
        settings: &Settings,
        today: NaiveDate,
    ) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        let mut expenses = ExpenseStore::load(paths.expenses_file(), today);
        if settings.audit_enabled {
            expenses = expenses.with_audit(AuditLogger::new(paths.audit_log()));
        }

        Ok(Self { paths, expenses })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Audit log for this storage location
    pub fn audit_logger(&self) -> AuditLogger {
        AuditLogger::new(self.paths.audit_log())
    }
}
