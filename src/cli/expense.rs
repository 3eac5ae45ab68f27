//! Expense CLI commands
//!
//! Implements the commands that add, remove and list expenses.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseDraft, ExpenseId};
use crate::reports::search;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        title: String,
        /// Amount spent (e.g., "12.50")
        amount: String,
        /// Category name
        #[arg(short, long, default_value = "Food")]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Remove an expense
    #[command(alias = "rm")]
    Remove {
        /// Expense ID
        id: String,
    },
    /// List expenses, most recent first
    #[command(alias = "ls")]
    List {
        /// Only show expenses whose title or category contains this text
        #[arg(short, long)]
        query: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            category,
            date,
        } => {
            let date = date.unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
            let draft = ExpenseDraft::new(title, amount, category, date);

            let expense = storage.expenses.add(draft, today)?;
            println!(
                "Added: {} {} ({})",
                expense.title,
                expense.amount.format_with_symbol(&settings.currency_symbol),
                expense.category
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::Remove { id } => {
            let id = resolve_id(storage, &id);
            if storage.expenses.remove(&id)? {
                println!("Removed expense {}", id);
            } else {
                println!("No expense with ID {}", id);
            }
        }

        ExpenseCommands::List { query, limit } => {
            let sorted = storage.expenses.sorted_by_date();
            let mut matches = search(&sorted, query.as_deref().unwrap_or(""));
            if let Some(limit) = limit {
                matches.truncate(limit);
            }

            let shown = matches.len();
            print!("{}", format_expense_table(matches, settings));
            println!("Showing {} of {} expenses", shown, storage.expenses.len());
        }

        ExpenseCommands::Show { id } => {
            let id = resolve_id(storage, &id);
            let expense = storage
                .expenses
                .find(&id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.as_str()))?;
            print!("{}", format_expense_details(expense, settings));
        }
    }

    Ok(())
}

/// Match an exact ID, or the one ID starting with `input`
///
/// Tables show shortened IDs, so a unique prefix is accepted. Anything else
/// is passed through unchanged.
fn resolve_id(storage: &Storage, input: &str) -> ExpenseId {
    let input = input.trim();
    let exact: ExpenseId = input.into();
    if storage.expenses.find(&exact).is_some() {
        return exact;
    }

    let mut candidates = storage
        .expenses
        .expenses()
        .iter()
        .filter(|e| e.id.as_str().starts_with(input));
    match (candidates.next(), candidates.next()) {
        (Some(only), None) if !input.is_empty() => only.id.clone(),
        _ => exact,
    }
}
