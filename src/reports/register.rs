//! Expense register: display ordering and keyword search

use crate::models::Expense;

/// Copy of the collection sorted by date, most recent first
///
/// Expenses with the same timestamp keep their collection order.
pub fn sorted_by_date(expenses: &[Expense]) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Expenses whose title or category contains `query` (case-insensitive)
///
/// A blank query matches everything.
pub fn search<'a>(expenses: &'a [Expense], query: &str) -> Vec<&'a Expense> {
    expenses.iter().filter(|e| e.matches(query)).collect()
}
