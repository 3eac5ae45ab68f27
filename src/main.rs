use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, Level};

use expense_flow::cli::{
    handle_expense_command, handle_report_command, ExpenseCommands, ReportCommands,
};
use expense_flow::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_flow::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-flow",
    version,
    about = "Terminal personal expense tracker",
    long_about = "Expense Flow records day-to-day expenses and shows where the money \
                  went: headline totals, a monthly spending trend and a per-category \
                  breakdown of the current month."
)]
struct Cli {
    /// Directory holding the expense data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Initialize paths and settings
    let paths = ExpensePaths::resolve(cli.data_dir)?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    let today = chrono::Local::now().date_naive();
    debug!(base_dir = %paths.base_dir().display(), %today, "Starting");

    let mut storage = Storage::open(paths.clone(), &settings, today)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut storage, &settings, today, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }
            println!("Expense Flow Configuration");
            println!("==========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Trend months:    {}", settings.trend_months);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            handle_report_command(
                &storage,
                &settings,
                today,
                ReportCommands::Dashboard { months: None },
            )?;
        }
    }

    Ok(())
}
