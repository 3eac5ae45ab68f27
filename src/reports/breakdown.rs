//! Category breakdown
//!
//! Groups one month's expenses by category with each category's share of
//! the month's spending.

use crate::models::{Category, Expense, Money};

/// Spending in one category and its share of the total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub value: Money,
    /// Fraction of the total in `0.0..=1.0`
    pub share: f64,
}

impl CategoryShare {
    /// Share expressed as a percentage
    pub fn percentage(&self) -> f64 {
        self.share * 100.0
    }
}

/// Sum spending per category, largest first
///
/// Ties keep the order in which categories were first encountered. When
/// the total is zero every share is zero.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryShare> {
    let mut totals: Vec<(Category, Money)> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, value)) => *value += expense.amount,
            None => totals.push((expense.category, expense.amount)),
        }
    }

    let total: Money = totals.iter().map(|(_, value)| *value).sum();

    let mut rows: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(category, value)| CategoryShare {
            category,
            value,
            share: if total.is_zero() {
                0.0
            } else {
                value.cents() as f64 / total.cents() as f64
            },
        })
        .collect();

    // sort_by is stable, so equal values keep encounter order
    rows.sort_by(|a, b| b.value.cmp(&a.value));
    rows
}
