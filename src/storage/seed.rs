//! Seed expenses used when no valid stored state exists

use chrono::{Duration, NaiveDate};

use crate::models::{local_timestamp, Category, Expense, Money, MonthKey};

/// The five example expenses, dated relative to `today`
///
/// Covers Food, Health and Entertainment in the current month window,
/// Utilities on the 12th of last month and Transportation on the 25th of
/// the month before that.
pub fn seed_expenses(today: NaiveDate) -> Vec<Expense> {
    let month = MonthKey::of(today);
    let last_month_12th = month.back(1).day(12).unwrap_or(today);
    let two_months_ago_25th = month.back(2).day(25).unwrap_or(today);

    vec![
        Expense::with_id(
            "seed-1",
            "Groceries",
            Category::Food,
            Money::from_cents(8475),
            local_timestamp(today),
        ),
        Expense::with_id(
            "seed-2",
            "Gym membership",
            Category::Health,
            Money::from_cents(4850),
            local_timestamp(today - Duration::days(3)),
        ),
        Expense::with_id(
            "seed-3",
            "Coffee catchup",
            Category::Entertainment,
            Money::from_cents(1240),
            local_timestamp(today - Duration::days(6)),
        ),
        Expense::with_id(
            "seed-4",
            "Light bill",
            Category::Utilities,
            Money::from_cents(9210),
            local_timestamp(last_month_12th),
        ),
        Expense::with_id(
            "seed-5",
            "Metro pass",
            Category::Transportation,
            Money::from_cents(2800),
            local_timestamp(two_months_ago_25th),
        ),
    ]
}
