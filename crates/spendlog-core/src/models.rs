//! Domain models for Spendlog

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of an expense, unique within a ledger session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub u64);

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ExpenseId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("Invalid expense id: {}", s))
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Decimal,
    pub description: String,
    /// Category name at the time of the last write (not a reference)
    pub category: String,
    pub date: NaiveDate,
}

/// Raw field values for a new or edited expense, as entered in a form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub amount: String,
    pub description: String,
    pub category: String,
    /// ISO `YYYY-MM-DD`
    pub date: String,
}

impl ExpenseDraft {
    pub fn new(
        amount: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Pre-fill a draft from an existing record (edit form)
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            amount: expense.amount.to_string(),
            description: expense.description.clone(),
            category: expense.category.clone(),
            date: expense.date.format(crate::money::DATE_FORMAT).to_string(),
        }
    }
}

/// Sum of amounts for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Per-category totals in first-seen order
///
/// Categories with no records in the aggregated set are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTotals(pub Vec<CategoryTotal>);

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.0
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One row of the category analytics view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub total: Decimal,
    pub count: usize,
    /// Share of the grand total, one decimal place (e.g. "84.9")
    pub percentage: String,
    /// Mean amount per record in this category
    pub average: Decimal,
}

/// Time-normalized spending rates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingRates {
    pub daily: Decimal,
    pub weekly: Decimal,
    pub monthly: Decimal,
}

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: Decimal,
    pub monthly_average: Decimal,
    pub expense_count: usize,
    pub category_count: usize,
}
