//! Audit logging for Expense Flow
//!
//! Records every added and removed expense in an append-only audit log.
//!
//! - `AuditEntry`: a single log entry with timestamp, operation and a
//!   snapshot of the affected expense.
//! - `AuditLogger`: writes entries to the log file as line-delimited JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_flow::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(&expense))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
