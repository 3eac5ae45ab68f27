//! Path management for Expense Flow
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory passed by the caller (the `--data-dir` flag)
//! 2. `EXPENSE_FLOW_DATA_DIR` environment variable (if set)
//! 3. The platform data directory from [`directories::ProjectDirs`]
//!    (`~/.local/share/expense-flow` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_FLOW_DATA_DIR";

/// Name of the persisted slot holding the expense collection
pub const STORAGE_KEY: &str = "expense-flow-data-v1";

/// Manages all paths used by Expense Flow
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all Expense Flow data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from the environment or the platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Use `base_dir` when given, otherwise fall back to [`ExpensePaths::new`]
    pub fn resolve(base_dir: Option<PathBuf>) -> Result<Self, ExpenseError> {
        match base_dir {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the persisted expense slot
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", STORAGE_KEY))
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", "expense-flow")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Could not determine a home directory".into()))
}
