//! Headline spending figures

use crate::models::{Expense, Money, MonthKey};

/// Total, current month, previous month and largest single expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Sum over the whole collection
    pub total_spent: Money,
    /// Sum over the current month
    pub monthly_spent: Money,
    /// Sum over the previous month, zero when there is none
    pub previous_month_spent: Money,
    /// Largest single amount, zero for an empty collection
    pub largest_expense: Money,
}

impl Summary {
    pub fn compute(expenses: &[Expense], current: MonthKey, previous: Option<MonthKey>) -> Self {
        Self {
            total_spent: expenses.iter().map(|e| e.amount).sum(),
            monthly_spent: spent_in(expenses, current),
            previous_month_spent: previous
                .map(|month| spent_in(expenses, month))
                .unwrap_or_default(),
            largest_expense: expenses
                .iter()
                .map(|e| e.amount)
                .max()
                .unwrap_or_default(),
        }
    }

    /// Current month minus previous month
    pub fn month_over_month_change(&self) -> Money {
        self.monthly_spent - self.previous_month_spent
    }
}

fn spent_in(expenses: &[Expense], month: MonthKey) -> Money {
    expenses
        .iter()
        .filter(|e| e.month() == month)
        .map(|e| e.amount)
        .sum()
}
