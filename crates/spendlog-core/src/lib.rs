//! Spendlog Core Library
//!
//! Ledger and analytics engine for the Spendlog expense tracker:
//! - Expense store with insertion-ordered records
//! - Category registry with cascading reassignment on removal
//! - Month/year/category filter predicate
//! - Totals, per-category breakdowns, rankings and spending rates
//! - CSV export of a filtered set with a summary block
//! - Serializable snapshots for callers that persist the ledger
//!
//! Everything is in memory and synchronous. A host with several concurrent
//! callers must serialize access to a [`Ledger`] itself.

pub mod categories;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod ledger;
pub mod models;
pub mod money;
pub mod reports;
pub mod snapshot;
pub mod store;

pub use categories::{CategoryRegistry, DEFAULT_CATEGORIES, FALLBACK_CATEGORY};
pub use config::LedgerConfig;
pub use error::{Error, Result};
pub use export::{export_filename, ExportDocument};
pub use filter::ExpenseFilter;
pub use ledger::Ledger;
pub use models::{
    CategoryBreakdown, CategoryTotal, CategoryTotals, DashboardStats, Expense, ExpenseDraft,
    ExpenseId, SpendingRates,
};
pub use money::{CurrencyFormat, Grouping};
pub use snapshot::Snapshot;
pub use store::ExpenseStore;
