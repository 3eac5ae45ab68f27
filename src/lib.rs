//! Expense Flow - Terminal personal expense tracker
//!
//! This library provides the core functionality for the Expense Flow
//! application: a persisted list of expenses plus the monthly trend,
//! category breakdown and headline summary derived from it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories, months)
//! - `storage`: JSON slot storage and seed data
//! - `reports`: Pure aggregation over the expense collection
//! - `audit`: Audit logging system
//! - `cli`: Command handlers
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_flow::config::{ExpensePaths, Settings};
//! use expense_flow::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let today = chrono::Local::now().date_naive();
//! let storage = Storage::open(paths, &settings, today)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::ExpenseError;
