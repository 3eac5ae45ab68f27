//! Monthly spending trend
//!
//! Buckets expenses into calendar months over a trailing window.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Expense, Money, MonthKey};

/// Total spent in one month of the trend window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: MonthKey,
    pub total: Money,
}

/// Longest trend window, ten years
pub const MAX_TREND_MONTHS: u32 = 120;

/// The `count` most recent months ending at the month of `today`, oldest first
///
/// `count` is capped at [`MAX_TREND_MONTHS`].
pub fn trailing_months(today: NaiveDate, count: usize) -> Vec<MonthKey> {
    let current = MonthKey::of(today);
    let count = u32::try_from(count).unwrap_or(u32::MAX).min(MAX_TREND_MONTHS);
    (0..count).rev().map(|back| current.back(back)).collect()
}

/// Sum expense amounts per requested month
///
/// Months without expenses total zero; expenses outside the requested
/// months are ignored.
pub fn monthly_totals(expenses: &[Expense], months: &[MonthKey]) -> Vec<MonthlyTotal> {
    let mut totals: HashMap<MonthKey, Money> =
        months.iter().map(|month| (*month, Money::zero())).collect();

    for expense in expenses {
        if let Some(total) = totals.get_mut(&expense.month()) {
            *total += expense.amount;
        }
    }

    months
        .iter()
        .map(|month| MonthlyTotal {
            month: *month,
            total: totals.get(month).copied().unwrap_or_default(),
        })
        .collect()
}

/// Highest monthly total in a trend, used to scale bars
pub fn peak(trend: &[MonthlyTotal]) -> Money {
    trend
        .iter()
        .map(|row| row.total)
        .max()
        .unwrap_or_default()
}
