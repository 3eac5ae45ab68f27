//! Expense store backed by a single JSON slot
//!
//! The store owns the whole expense collection. It is hydrated once by
//! [`ExpenseStore::load`] and rewrites the full collection after every
//! mutation.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId};
use crate::reports::sorted_by_date;

use super::file_io::{read_optional, write_json_atomic};
use super::seed::seed_expenses;

/// Owner of the expense collection and its persisted slot
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
    audit: Option<AuditLogger>,
    /// The slot held data that could not be loaded; copy it aside before
    /// the first overwrite
    backup_pending: bool,
}

impl ExpenseStore {
    /// Load the collection from `path`
    ///
    /// A missing, blank, unparsable or invalid slot is replaced by the seed
    /// expenses for `today`. The failure is logged, never returned. A slot
    /// that failed to load is copied to `*.json.bak` before it is first
    /// overwritten.
    pub fn load(path: impl Into<PathBuf>, today: NaiveDate) -> Self {
        let path = path.into();
        let mut backup_pending = false;

        let expenses = match read_stored(&path) {
            Ok(Some(expenses)) => {
                debug!(count = expenses.len(), path = %path.display(), "Loaded expenses");
                expenses
            }
            Ok(None) => {
                debug!(path = %path.display(), "No stored expenses, using seed data");
                seed_expenses(today)
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to parse expenses from storage, using seed data"
                );
                backup_pending = path.exists();
                seed_expenses(today)
            }
        };

        Self {
            path,
            expenses,
            audit: None,
            backup_pending,
        }
    }

    /// Record every mutation in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Path of the persisted slot
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The collection in insertion order (newest additions first)
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The collection sorted by date, most recent first
    pub fn sorted_by_date(&self) -> Vec<Expense> {
        sorted_by_date(&self.expenses)
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Find an expense by ID
    pub fn find(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Validate a draft and prepend the resulting expense
    ///
    /// An invalid draft returns [`ExpenseError::Validation`] and leaves both
    /// the collection and the stored slot untouched.
    pub fn add(&mut self, draft: ExpenseDraft, today: NaiveDate) -> ExpenseResult<Expense> {
        let mut expense = draft.into_expense(today)?;
        while self.find(&expense.id).is_some() {
            expense.id = ExpenseId::new();
        }

        self.expenses.insert(0, expense.clone());
        self.save()?;
        self.record(AuditEntry::create(&expense));

        debug!(id = %expense.id, amount = %expense.amount, "Added expense");
        Ok(expense)
    }

    /// Remove an expense by ID
    ///
    /// Returns whether anything was removed; an unknown ID is a no-op. The
    /// collection is persisted in both cases.
    pub fn remove(&mut self, id: &ExpenseId) -> ExpenseResult<bool> {
        let removed = self
            .expenses
            .iter()
            .position(|e| &e.id == id)
            .map(|index| self.expenses.remove(index));

        self.save()?;

        match removed {
            Some(expense) => {
                self.record(AuditEntry::delete(&expense));
                debug!(id = %id, "Removed expense");
                Ok(true)
            }
            None => {
                debug!(id = %id, "Remove ignored, no such expense");
                Ok(false)
            }
        }
    }

    /// Write the full collection to the slot
    pub fn save(&mut self) -> ExpenseResult<()> {
        if self.backup_pending {
            let backup = self.backup_path();
            fs::copy(&self.path, &backup).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Refusing to overwrite unreadable {}: backup to {} failed: {}",
                    self.path.display(),
                    backup.display(),
                    e
                ))
            })?;
            warn!(
                backup = %backup.display(),
                "Saved unreadable expense data before overwriting"
            );
            self.backup_pending = false;
        }

        write_json_atomic(&self.path, self.expenses.as_slice())
    }

    /// Where unreadable slot contents are copied before the first overwrite
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    /// Append to the audit log without failing an already persisted mutation
    fn record(&self, entry: AuditEntry) {
        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&entry) {
                warn!(
                    expense_id = %entry.expense_id,
                    error = %e,
                    "Failed to write audit entry"
                );
            }
        }
    }
}

/// Read the stored collection, `None` when there is nothing stored
fn read_stored(path: &Path) -> ExpenseResult<Option<Vec<Expense>>> {
    let raw = match read_optional(path)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };

    let expenses: Vec<Expense> = serde_json::from_str(&raw)?;

    let mut seen = HashSet::new();
    for expense in &expenses {
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(format!("{}: {}", expense.id, e)))?;
        if !seen.insert(&expense.id) {
            return Err(ExpenseError::Validation(format!(
                "duplicate expense id {}",
                expense.id
            )));
        }
    }

    Ok(Some(expenses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Category, Money};
    use std::fs;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn slot(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("expense-flow-data-v1.json")
    }

    fn seed_ids(store: &ExpenseStore) -> Vec<&str> {
        store.expenses().iter().map(|e| e.id.as_str()).collect()
    }

    fn draft(title: &str, amount: &str) -> ExpenseDraft {
        ExpenseDraft::new(title, amount, "Shopping", "2026-10-18")
    }

    #[test]
    fn test_missing_slot_loads_seed() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::load(slot(&temp_dir), today());

        assert_eq!(
            seed_ids(&store),
            vec!["seed-1", "seed-2", "seed-3", "seed-4", "seed-5"]
        );
        // Loading alone does not write anything
        assert!(!slot(&temp_dir).exists());
    }

    #[test]
    fn test_corrupt_slot_loads_seed() {
        let temp_dir = TempDir::new().unwrap();
        for garbage in ["not json", "   ", "{\"id\": 1}", "[{\"title\": \"x\"}]"] {
            fs::write(slot(&temp_dir), garbage).unwrap();
            let store = ExpenseStore::load(slot(&temp_dir), today());
            assert_eq!(store.len(), 5, "input: {garbage}");
        }
    }

    #[test]
    fn test_invalid_records_load_seed() {
        let temp_dir = TempDir::new().unwrap();
        let negative = r#"[{"id":"a","title":"Refund","category":"Other","amount":-5,"date":"2026-10-01T12:00:00Z"}]"#;
        fs::write(slot(&temp_dir), negative).unwrap();
        assert_eq!(seed_ids(&ExpenseStore::load(slot(&temp_dir), today()))[0], "seed-1");

        let duplicate = r#"[
            {"id":"a","title":"One","category":"Food","amount":1,"date":"2026-10-01T12:00:00Z"},
            {"id":"a","title":"Two","category":"Food","amount":2,"date":"2026-10-02T12:00:00Z"}
        ]"#;
        fs::write(slot(&temp_dir), duplicate).unwrap();
        assert_eq!(seed_ids(&ExpenseStore::load(slot(&temp_dir), today()))[0], "seed-1");
    }

    #[test]
    fn test_empty_array_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(slot(&temp_dir), "[]").unwrap();

        let store = ExpenseStore::load(slot(&temp_dir), today());
        assert!(store.is_empty());
    }

    #[test]
    fn test_accepts_string_amounts() {
        let temp_dir = TempDir::new().unwrap();
        let data = r#"[{"id":"x1","title":"Book","category":"Shopping","amount":"19.99","date":"2026-10-03T09:30:00.000Z"}]"#;
        fs::write(slot(&temp_dir), data).unwrap();

        let store = ExpenseStore::load(slot(&temp_dir), today());
        assert_eq!(store.len(), 1);
        assert_eq!(store.expenses()[0].amount.cents(), 1999);
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::load(slot(&temp_dir), today());

        let added = store.add(draft("  Shoes ", "59.999"), today()).unwrap();
        assert_eq!(added.title, "Shoes");
        assert_eq!(added.amount.cents(), 6000);
        assert_eq!(added.category, Category::Shopping);
        assert_eq!(store.expenses()[0].id, added.id);
        assert_eq!(store.len(), 6);

        let reloaded = ExpenseStore::load(slot(&temp_dir), today());
        assert_eq!(reloaded.expenses(), store.expenses());
    }

    #[test]
    fn test_invalid_draft_leaves_collection_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::load(slot(&temp_dir), today());
        let before = store.expenses().to_vec();

        for amount in ["-5", "abc", "0", ""] {
            let err = store.add(draft("Coffee", amount), today()).unwrap_err();
            assert!(err.is_validation(), "amount {amount:?}");
        }
        let err = store.add(draft("   ", "5"), today()).unwrap_err();
        assert!(err.is_validation());

        assert_eq!(store.expenses(), before.as_slice());
        assert!(!slot(&temp_dir).exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::load(slot(&temp_dir), today());
        let id = ExpenseId::from("seed-3");

        assert!(store.remove(&id).unwrap());
        let once = store.expenses().to_vec();

        assert!(!store.remove(&id).unwrap());
        assert_eq!(store.expenses(), once.as_slice());
        assert_eq!(store.len(), 4);
        assert!(store.find(&id).is_none());
    }

    #[test]
    fn test_remove_unknown_still_persists() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::load(slot(&temp_dir), today());

        assert!(!store.remove(&ExpenseId::from("nope")).unwrap());
        assert!(slot(&temp_dir).exists());
        assert_eq!(ExpenseStore::load(slot(&temp_dir), today()).len(), 5);
    }

    #[test]
    fn test_round_trip_preserves_collection() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::load(slot(&temp_dir), today());
        store.add(draft("Lamp", "24.3"), today()).unwrap();
        store.save().unwrap();

        let reloaded = ExpenseStore::load(slot(&temp_dir), today());
        assert_eq!(reloaded.expenses(), store.expenses());
        assert_eq!(reloaded.expenses()[0].amount, Money::from_cents(2430));
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::load(slot(&temp_dir), today());
        store
            .add(ExpenseDraft::new("Old", "1", "Other", "2026-01-01"), today())
            .unwrap();

        let sorted = store.sorted_by_date();
        assert_eq!(sorted[0].id.as_str(), "seed-1");
        assert_eq!(sorted.last().unwrap().title, "Old");
        assert!(sorted.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_unreadable_slot_is_backed_up_before_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(slot(&temp_dir), "{not json").unwrap();

        let mut store = ExpenseStore::load(slot(&temp_dir), today());
        assert_eq!(store.len(), 5);
        assert!(!store.backup_path().exists());

        store.add(draft("Umbrella", "15"), today()).unwrap();
        assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), "{not json");
        assert_eq!(ExpenseStore::load(slot(&temp_dir), today()).len(), 6);

        // Only the first overwrite takes a backup
        fs::write(store.backup_path(), "kept").unwrap();
        store.remove(&ExpenseId::from("seed-1")).unwrap();
        assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), "kept");
    }

    #[test]
    fn test_missing_slot_takes_no_backup() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::load(slot(&temp_dir), today());

        store.add(draft("Umbrella", "15"), today()).unwrap();
        assert!(!store.backup_path().exists());
    }

    #[test]
    fn test_audit_failure_does_not_fail_mutation() {
        let temp_dir = TempDir::new().unwrap();
        let audit_path = temp_dir.path().join("audit.log");
        fs::create_dir(&audit_path).unwrap();

        let mut store =
            ExpenseStore::load(slot(&temp_dir), today()).with_audit(AuditLogger::new(audit_path));

        let added = store.add(draft("Socks", "8"), today()).unwrap();
        assert!(store.remove(&ExpenseId::from("seed-2")).unwrap());

        let reloaded = ExpenseStore::load(slot(&temp_dir), today());
        assert_eq!(reloaded.len(), 5);
        assert_eq!(reloaded.expenses()[0].id, added.id);
        assert!(reloaded.find(&ExpenseId::from("seed-2")).is_none());
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut store = ExpenseStore::load(slot(&temp_dir), today()).with_audit(logger.clone());

        let added = store.add(draft("Socks", "8"), today()).unwrap();
        store.remove(&ExpenseId::from("seed-1")).unwrap();
        store.remove(&ExpenseId::from("missing")).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].expense_id, added.id.to_string());
        assert_eq!(entries[1].operation, Operation::Delete);
        assert_eq!(entries[1].expense_id, "seed-1");
    }
}
