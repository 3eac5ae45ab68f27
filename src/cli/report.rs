//! CLI commands for reports
//!
//! Provides the dashboard and the individual trend, breakdown and history
//! views.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::breakdown_total;
use crate::display::{
    format_breakdown, format_categories, format_dashboard, format_history, format_trend,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, MonthKey};
use crate::reports::{
    category_breakdown, monthly_totals, trailing_months, Dashboard, MAX_TREND_MONTHS,
};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the spending dashboard (default)
    #[command(alias = "dash")]
    Dashboard {
        /// Number of months in the trend (1-120)
        #[arg(short, long, value_parser = months_parser())]
        months: Option<u32>,
    },

    /// Show monthly spending totals
    Trend {
        /// Number of months to show (1-120)
        #[arg(short, long, value_parser = months_parser())]
        months: Option<u32>,
    },

    /// Show spending by category for one month
    Breakdown {
        /// Month to report on (e.g., "2026-01"), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List the available categories
    Categories,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn months_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(MAX_TREND_MONTHS))
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    match cmd {
        ReportCommands::Dashboard { months } => {
            let months = months.map_or(settings.trend_months, |m| m as usize);
            let dashboard = Dashboard::generate(
                storage.expenses.expenses(),
                today,
                months,
                settings.recent_limit,
            );
            print!("{}", format_dashboard(&dashboard, settings));
        }

        ReportCommands::Trend { months } => {
            let months = months.map_or(settings.trend_months, |m| m as usize);
            let keys = trailing_months(today, months);
            let trend = monthly_totals(storage.expenses.expenses(), &keys);
            print!("{}", format_trend(&trend, settings));
        }

        ReportCommands::Breakdown { month } => {
            let month = match month {
                Some(text) => text
                    .parse::<MonthKey>()
                    .map_err(|e| ExpenseError::Validation(e.to_string()))?,
                None => MonthKey::of(today),
            };

            let in_month: Vec<Expense> = storage
                .expenses
                .sorted_by_date()
                .into_iter()
                .filter(|e| e.month() == month)
                .collect();
            let rows = category_breakdown(&in_month);

            print!("{}", format_breakdown(month, &rows, settings));
            if !rows.is_empty() {
                println!(
                    "  {:<16}{:>12}",
                    "Total",
                    breakdown_total(&rows).format_with_symbol(&settings.currency_symbol)
                );
            }
        }

        ReportCommands::Categories => {
            print!("{}", format_categories());
        }

        ReportCommands::History { count } => {
            let entries = storage.audit_logger().read_recent(count)?;
            print!("{}", format_history(&entries));
        }
    }

    Ok(())
}
