//! Report formatting utilities for terminal output
//!
//! Renders the dashboard sections: summary cards, category breakdown,
//! monthly trend and the recent expense list.

use crate::audit::AuditEntry;
use crate::config::Settings;
use crate::models::{Category, Money, MonthKey};
use crate::reports::{peak, CategoryShare, Dashboard, MonthlyTotal, Summary};

use super::expense::format_expense_table;

const BAR_WIDTH: usize = 24;
const RULE_WIDTH: usize = 56;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Format the headline summary cards
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!(
        "{:<18}{:>14}\n",
        "Total Spend",
        summary.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<18}{:>14}   Change vs last month · {}\n",
        "This Month",
        summary.monthly_spent.format_with_symbol(symbol),
        summary.month_over_month_change().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<18}{:>14}\n",
        "Largest Expense",
        summary.largest_expense.format_with_symbol(symbol)
    ));

    output
}

/// Format the category breakdown for one month
pub fn format_breakdown(month: MonthKey, rows: &[CategoryShare], settings: &Settings) -> String {
    let mut output = format!("Category Breakdown ({})\n", month.label());
    output.push_str(&separator(RULE_WIDTH));
    output.push('\n');

    if rows.is_empty() {
        output.push_str("  No expenses this month\n");
        return output;
    }

    let max = rows
        .iter()
        .map(|row| row.value)
        .max()
        .unwrap_or_default()
        .as_f64();

    for row in rows {
        output.push_str(&format!(
            "  {:<16}{:>12} {:>6}  {}\n",
            row.category.name(),
            row.value.format_with_symbol(&settings.currency_symbol),
            format_percentage(row.percentage()),
            format_bar(row.value.as_f64(), max, BAR_WIDTH)
        ));
    }

    output
}

/// Format the monthly trend, oldest month first
pub fn format_trend(trend: &[MonthlyTotal], settings: &Settings) -> String {
    let mut output = String::from("Monthly Trend\n");
    output.push_str(&separator(RULE_WIDTH));
    output.push('\n');

    let max = peak(trend).as_f64();
    for row in trend {
        output.push_str(&format!(
            "  {:<10}{:>12}  {}\n",
            row.month.label(),
            row.total.format_with_symbol(&settings.currency_symbol),
            format_bar(row.total.as_f64(), max, BAR_WIDTH)
        ));
    }

    output
}

/// Format the complete dashboard
pub fn format_dashboard(dashboard: &Dashboard, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Expense Flow · {}\n",
        dashboard.current_month.label()
    ));
    output.push_str(&double_separator(RULE_WIDTH));
    output.push('\n');
    output.push_str(&format_summary(&dashboard.summary, settings));
    output.push('\n');

    output.push_str(&format_breakdown(
        dashboard.current_month,
        &dashboard.breakdown,
        settings,
    ));
    output.push('\n');

    output.push_str(&format_trend(&dashboard.trend, settings));
    output.push('\n');

    output.push_str(&format!(
        "Recent Expenses ({} of {})\n",
        dashboard.recent.len(),
        dashboard.expense_count
    ));
    output.push_str(&format_expense_table(&dashboard.recent, settings));

    output
}

/// Format the list of selectable categories
pub fn format_categories() -> String {
    let mut output = String::from("Categories\n");
    output.push_str(&separator(20));
    output.push('\n');
    for category in Category::all() {
        let marker = if *category == Category::default() {
            " (default)"
        } else {
            ""
        };
        output.push_str(&format!("  {}{}\n", category, marker));
    }
    output
}

/// Format audit entries, one per line
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

/// Grand total of a set of rows, for the breakdown footer
pub fn breakdown_total(rows: &[CategoryShare]) -> Money {
    rows.iter().map(|row| row.value).sum()
}
