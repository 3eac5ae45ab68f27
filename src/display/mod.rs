//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and reports for terminal
//! display, including tables and text bar charts.

pub mod expense;
pub mod report;

pub use expense::{format_date, format_expense_details, format_expense_table};
pub use report::{
    format_breakdown, format_categories, format_dashboard, format_history, format_summary,
    format_trend,
};
