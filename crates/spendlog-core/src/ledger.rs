//! Ledger engine
//!
//! Binds the category registry and the expense store together. Operations
//! that span both, like removing a category and reassigning its expenses,
//! live here so neither component reaches into the other.
//!
//! Filtered views (`filtered`, `total_amount`, `category_totals`, `export`)
//! take an [`ExpenseFilter`]. The analytics views (`category_analytics`,
//! `top_expenses`, `average_spending`) always cover the whole store.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::categories::CategoryRegistry;
use crate::config::LedgerConfig;
use crate::error::{Error, Result};
use crate::export::{encode, export_filename, ExportDocument};
use crate::filter::ExpenseFilter;
use crate::models::{
    CategoryBreakdown, CategoryTotals, DashboardStats, Expense, ExpenseDraft, ExpenseId,
    SpendingRates,
};
use crate::reports;
use crate::store::ExpenseStore;

/// Sample records a fresh ledger can be seeded with
const SAMPLE_EXPENSES: &[(&str, &str, &str, &str)] = &[
    ("450.50", "Lunch at cafe", "Food", "2024-08-05"),
    ("80.00", "Auto fare", "Transportation", "2024-08-04"),
    ("800.00", "Movie tickets", "Entertainment", "2024-07-30"),
    ("1200.00", "Grocery shopping", "Food", "2024-08-03"),
    ("250.00", "Metro card recharge", "Transportation", "2024-08-02"),
];

#[derive(Debug, Clone)]
pub struct Ledger {
    categories: CategoryRegistry,
    expenses: ExpenseStore,
    config: LedgerConfig,
}

impl Ledger {
    /// Empty ledger seeded with the configured categories
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            categories: CategoryRegistry::new(config.default_categories.iter().cloned()),
            expenses: ExpenseStore::new(),
            config,
        }
    }

    /// Rebuild a ledger from existing parts (used when restoring a snapshot)
    pub fn from_parts(
        categories: CategoryRegistry,
        expenses: ExpenseStore,
        config: LedgerConfig,
    ) -> Self {
        Self {
            categories,
            expenses,
            config,
        }
    }

    /// Ledger pre-filled with a handful of sample expenses
    pub fn with_sample_data(config: LedgerConfig) -> Result<Self> {
        let mut ledger = Self::new(config);
        for (amount, description, category, date) in SAMPLE_EXPENSES {
            ledger.add_expense(&ExpenseDraft::new(*amount, *description, *category, *date))?;
        }
        Ok(ledger)
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ----- Expenses -----

    /// Add an expense.
    ///
    /// The category is stored as given. It is only checked against the
    /// registry when `strict_categories` is enabled.
    pub fn add_expense(&mut self, draft: &ExpenseDraft) -> Result<Expense> {
        self.check_category(&draft.category)?;
        self.expenses.add(draft)
    }

    /// Replace an expense; `Ok(false)` if `id` is unknown
    pub fn update_expense(&mut self, id: ExpenseId, draft: &ExpenseDraft) -> Result<bool> {
        if self.expenses.get(id).is_some() {
            self.check_category(&draft.category)?;
        }
        self.expenses.update(id, draft)
    }

    /// Delete an expense; false if `id` is unknown
    pub fn remove_expense(&mut self, id: ExpenseId) -> bool {
        self.expenses.remove(id)
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.get(id)
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        self.expenses.all()
    }

    /// Most recently added expenses, newest first
    pub fn recent(&self, limit: usize) -> Vec<Expense> {
        self.expenses.recent(limit)
    }

    fn check_category(&self, category: &str) -> Result<()> {
        if self.config.strict_categories && !self.categories.contains(category) {
            warn!(category, "Rejected expense with unregistered category");
            return Err(Error::UnknownCategory(category.to_string()));
        }
        Ok(())
    }

    // ----- Categories -----

    pub fn add_category(&mut self, name: &str) -> Result<()> {
        self.categories.add(name)
    }

    /// Remove a category and move its expenses to the fallback category.
    ///
    /// Returns the number of expenses reassigned. Refused (nothing changes)
    /// when `name` is the last remaining category. The fallback category is
    /// used by name even if it has itself been removed from the registry.
    pub fn remove_category(&mut self, name: &str) -> Result<usize> {
        self.categories.remove(name)?;

        let fallback = self.config.fallback_category.clone();
        let reassigned = self.expenses.reassign_category(name, &fallback);
        if !self.categories.contains(&fallback) {
            warn!(
                category = name,
                fallback = %fallback,
                "Fallback category is not registered"
            );
        }

        info!(category = name, fallback = %fallback, reassigned, "Removed category");
        Ok(reassigned)
    }

    /// Category names in insertion order
    pub fn categories(&self) -> &[String] {
        self.categories.list()
    }

    pub fn category_registry(&self) -> &CategoryRegistry {
        &self.categories
    }

    // ----- Filtered views -----

    pub fn filtered(&self, filter: &ExpenseFilter<'_>) -> Vec<Expense> {
        filter.apply(self.expenses.all())
    }

    pub fn total_amount(&self, filter: &ExpenseFilter<'_>) -> Decimal {
        reports::total_amount(&self.filtered(filter))
    }

    pub fn category_totals(&self, filter: &ExpenseFilter<'_>) -> CategoryTotals {
        reports::category_totals(&self.filtered(filter))
    }

    /// Encode the filtered expenses and their summary as CSV.
    ///
    /// Fails with [`Error::EmptyExport`] when nothing matches the filter.
    pub fn export(&self, filter: &ExpenseFilter<'_>) -> Result<ExportDocument> {
        let records = self.filtered(filter);
        let totals = reports::category_totals(&records);
        let grand_total = reports::total_amount(&records);

        let content = match encode(&records, &totals, grand_total) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "Export skipped");
                return Err(e);
            }
        };
        let filename = export_filename(filter);

        info!(
            filename = %filename,
            records = records.len(),
            grand_total = %grand_total,
            "Exported expenses"
        );

        Ok(ExportDocument {
            filename,
            content,
            record_count: records.len(),
            grand_total,
        })
    }

    // ----- Whole-ledger analytics -----

    pub fn category_analytics(&self) -> Vec<CategoryBreakdown> {
        reports::category_analytics(self.expenses.all())
    }

    /// Largest expenses, `top_n` from config
    pub fn top_expenses(&self) -> Vec<Expense> {
        reports::top_expenses(self.expenses.all(), self.config.top_n)
    }

    pub fn average_spending(&self) -> SpendingRates {
        reports::average_spending(self.expenses.all())
    }

    pub fn available_years(&self) -> Vec<i32> {
        reports::available_years(self.expenses.all())
    }

    pub fn dashboard(&self) -> DashboardStats {
        DashboardStats {
            total: reports::total_amount(self.expenses.all()),
            monthly_average: self.average_spending().monthly,
            expense_count: self.expenses.len(),
            category_count: self.categories.len(),
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}
