//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Ledger file handling (open, save, init)
//! - `expenses` - Expense commands (add, edit, delete, list, recent)
//! - `categories` - Category commands (list, add, remove)
//! - `reports` - Dashboard and report commands
//! - `export` - CSV export command

pub mod categories;
pub mod core;
pub mod expenses;
pub mod export;
pub mod reports;

// Re-export command functions for main.rs
pub use categories::*;
pub use core::*;
pub use expenses::*;
pub use export::*;
pub use reports::*;

use spendlog_core::ExpenseFilter;

use crate::cli::FilterArgs;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Borrow filter arguments as an engine filter
pub fn to_filter(args: &FilterArgs) -> ExpenseFilter<'_> {
    ExpenseFilter::new()
        .month(args.month.as_deref())
        .year(args.year.as_deref())
        .category(args.category.as_deref())
}
