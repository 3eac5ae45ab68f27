//! Dashboard read model
//!
//! Everything the presentation layer shows, derived in one pass from the
//! expense collection and an explicit `today`.

use chrono::NaiveDate;

use crate::models::{Expense, MonthKey};

use super::breakdown::{category_breakdown, CategoryShare};
use super::register::sorted_by_date;
use super::summary::Summary;
use super::trend::{monthly_totals, trailing_months, MonthlyTotal};

/// Derived dashboard state
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub current_month: MonthKey,
    /// Second-to-last month of the trend window, if the window has one
    pub previous_month: Option<MonthKey>,
    /// Most recent expenses, date descending, capped at the recent limit
    pub recent: Vec<Expense>,
    /// Size of the whole collection
    pub expense_count: usize,
    pub trend: Vec<MonthlyTotal>,
    /// Breakdown of the current month only
    pub breakdown: Vec<CategoryShare>,
    pub summary: Summary,
}

impl Dashboard {
    /// Derive the dashboard for `today`
    ///
    /// `months` sets the trend window length, `recent_limit` how many
    /// expenses are listed.
    pub fn generate(
        expenses: &[Expense],
        today: NaiveDate,
        months: usize,
        recent_limit: usize,
    ) -> Self {
        let sorted = sorted_by_date(expenses);
        let month_keys = trailing_months(today, months);
        let current_month = MonthKey::of(today);
        let previous_month = month_keys.iter().rev().nth(1).copied();

        let current_expenses: Vec<Expense> = sorted
            .iter()
            .filter(|e| e.month() == current_month)
            .cloned()
            .collect();

        let trend = monthly_totals(expenses, &month_keys);
        let breakdown = category_breakdown(&current_expenses);
        let summary = Summary::compute(expenses, current_month, previous_month);

        let mut recent = sorted;
        recent.truncate(recent_limit);

        Self {
            today,
            current_month,
            previous_month,
            recent,
            expense_count: expenses.len(),
            trend,
            breakdown,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{local_timestamp, Category, Money};
    use crate::storage::seed_expenses;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_seed_dashboard() {
        let dashboard = Dashboard::generate(&seed_expenses(today()), today(), 6, 30);

        assert_eq!(dashboard.current_month.to_string(), "2026-10");
        assert_eq!(dashboard.previous_month.unwrap().to_string(), "2026-09");
        assert_eq!(dashboard.trend.len(), 6);
        assert_eq!(dashboard.recent.len(), 5);
        assert_eq!(dashboard.recent[0].id.as_str(), "seed-1");

        assert_eq!(dashboard.summary.total_spent.cents(), 26575);
        assert_eq!(dashboard.summary.monthly_spent.cents(), 14565);
        assert_eq!(dashboard.summary.largest_expense.cents(), 9210);

        let categories: Vec<_> = dashboard.breakdown.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![Category::Food, Category::Health, Category::Entertainment]
        );
    }

    #[test]
    fn test_recent_limit() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let expenses: Vec<Expense> = (1..=40)
            .map(|day| {
                Expense::new(
                    format!("Item {}", day),
                    Category::Other,
                    Money::from_cents(100),
                    local_timestamp(start + chrono::Duration::days(day)),
                )
            })
            .collect();

        let dashboard = Dashboard::generate(&expenses, today(), 6, 30);
        assert_eq!(dashboard.recent.len(), 30);
        assert_eq!(dashboard.expense_count, 40);
        assert_eq!(dashboard.recent[0].title, "Item 40");
        assert_eq!(dashboard.summary.total_spent.cents(), 4000);
    }

    #[test]
    fn test_single_month_window_has_no_previous() {
        let dashboard = Dashboard::generate(&seed_expenses(today()), today(), 1, 30);
        assert!(dashboard.previous_month.is_none());
        assert!(dashboard.summary.previous_month_spent.is_zero());
        assert_eq!(dashboard.trend.len(), 1);
    }

    #[test]
    fn test_empty_dashboard() {
        let dashboard = Dashboard::generate(&[], today(), 6, 30);
        assert!(dashboard.recent.is_empty());
        assert!(dashboard.breakdown.is_empty());
        assert!(dashboard.summary.total_spent.is_zero());
        assert!(dashboard.summary.largest_expense.is_zero());
        assert!(dashboard.trend.iter().all(|row| row.total.is_zero()));
    }
}
