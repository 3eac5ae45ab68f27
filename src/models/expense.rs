//! Expense model
//!
//! An [`Expense`] is created once from a validated [`ExpenseDraft`] and never
//! mutated afterward. Its timestamp is stored in UTC; grouping always uses
//! the local calendar date.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ExpenseError;

use super::category::{Category, CategoryParseError};
use super::ids::ExpenseId;
use super::money::{Money, MoneyParseError};
use super::month::MonthKey;

/// A single recorded spending event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Trimmed, non-empty description
    pub title: String,

    /// Spending category
    pub category: Category,

    /// Amount spent (always positive)
    pub amount: Money,

    /// When the expense happened
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh random ID
    pub fn new(
        title: impl Into<String>,
        category: Category,
        amount: Money,
        date: DateTime<Utc>,
    ) -> Self {
        Self::with_id(ExpenseId::new(), title, category, amount, date)
    }

    /// Create an expense with a known ID
    pub fn with_id(
        id: impl Into<ExpenseId>,
        title: impl Into<String>,
        category: Category,
        amount: Money,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            amount,
            date,
        }
    }

    /// The calendar date of this expense in the local timezone
    pub fn local_date(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }

    /// The month bucket this expense belongs to
    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.local_date())
    }

    /// Case-insensitive keyword match on title or category
    pub fn matches(&self, query: &str) -> bool {
        let term = query.trim().to_lowercase();
        term.is_empty()
            || self.title.to_lowercase().contains(&term)
            || self.category.name().to_lowercase().contains(&term)
    }

    /// Check the invariants every stored expense must satisfy
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.id.is_blank() {
            return Err(ExpenseValidationError::BlankId);
        }

        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

/// Unvalidated user input for a prospective expense
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseDraft {
    /// Create a draft from raw field values
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Validate and normalize the draft into a new expense
    ///
    /// The title is trimmed, the amount rounded to cents and required to be
    /// positive, and the date may not be later than `today`. Dates are either
    /// `YYYY-MM-DD` (placed at local noon) or full RFC 3339 timestamps.
    pub fn into_expense(self, today: NaiveDate) -> Result<Expense, ExpenseValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }

        let amount = Money::parse(&self.amount)?;
        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(amount));
        }

        let category: Category = self.category.parse()?;

        let date = parse_timestamp(&self.date)
            .ok_or_else(|| ExpenseValidationError::InvalidDate(self.date.trim().to_string()))?;
        let local = date.with_timezone(&Local).date_naive();
        if local > today {
            return Err(ExpenseValidationError::FutureDate { date: local, today });
        }

        Ok(Expense::new(title, category, amount, date))
    }
}

/// Place a calendar date at local noon, expressed in UTC
///
/// Noon keeps the local date stable across DST transitions.
pub fn local_timestamp(date: NaiveDate) -> DateTime<Utc> {
    let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));
    match Local.from_local_datetime(&noon).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&noon),
    }
}

fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(local_timestamp(date));
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Reasons a draft or stored record is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseValidationError {
    #[error("Expense ID cannot be blank")]
    BlankId,
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error(transparent)]
    InvalidAmount(#[from] MoneyParseError),
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Money),
    #[error(transparent)]
    UnknownCategory(#[from] CategoryParseError),
    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Date {date} is in the future (today is {today})")]
    FutureDate { date: NaiveDate, today: NaiveDate },
}

impl From<ExpenseValidationError> for ExpenseError {
    fn from(err: ExpenseValidationError) -> Self {
        ExpenseError::Validation(err.to_string())
    }
}
