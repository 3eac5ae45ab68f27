//! Core data models for Expense Flow
//!
//! This module contains the data structures of the expense domain:
//! expenses and their drafts, categories, money amounts and month buckets.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use category::{Category, CategoryParseError};
pub use expense::{local_timestamp, Expense, ExpenseDraft, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthKeyParseError};
