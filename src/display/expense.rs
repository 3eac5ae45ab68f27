//! Expense display formatting
//!
//! Renders expense lists as tables and single expenses as detail blocks.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a date with a user-supplied strftime pattern
///
/// Patterns chrono cannot render for a bare date, including malformed
/// specifiers and time or offset fields, fall back to `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut output = String::new();
    if write!(output, "{}", date.format(pattern)).is_ok() {
        return output;
    }
    date.format(FALLBACK_DATE_FORMAT).to_string()
}

/// Format expenses as a table, in the order given
pub fn format_expense_table<'a, I>(expenses: I, settings: &Settings) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|expense| ExpenseRow {
            id: expense.id.short().to_string(),
            date: format_date(expense.local_date(), &settings.date_format),
            title: expense.title.clone(),
            category: expense.category.to_string(),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
        })
        .collect();

    if rows.is_empty() {
        return "No expenses found. Try a different search.\n".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(4), Alignment::right());
    format!("{}\n", table)
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:   {}\n", expense.id));
    output.push_str(&format!("Title:     {}\n", expense.title));
    output.push_str(&format!("Category:  {}\n", expense.category));
    output.push_str(&format!(
        "Amount:    {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "Date:      {}\n",
        format_date(expense.local_date(), &settings.date_format)
    ));

    output
}
