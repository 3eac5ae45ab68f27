//! Reports module for Expense Flow
//!
//! Pure aggregation over the expense collection: monthly trend, category
//! breakdown, headline summary and the combined dashboard. Every function
//! takes the current date explicitly.

pub mod breakdown;
pub mod dashboard;
pub mod register;
pub mod summary;
pub mod trend;

pub use breakdown::{category_breakdown, CategoryShare};
pub use dashboard::Dashboard;
pub use register::{search, sorted_by_date};
pub use summary::Summary;
pub use trend::{monthly_totals, peak, trailing_months, MonthlyTotal, MAX_TREND_MONTHS};
