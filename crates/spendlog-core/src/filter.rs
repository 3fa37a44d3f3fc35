//! Expense filter predicate
//!
//! Combines optional month, year and category constraints into one predicate.
//! An absent (or empty) constraint matches every record for that dimension.

use chrono::Datelike;

use crate::models::Expense;

/// Builder for the month/year/category filter
///
/// The lifetime `'query` is how long the borrowed filter values must live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpenseFilter<'query> {
    /// Two-digit month, "01" to "12"
    pub month: Option<&'query str>,
    /// Four-digit year
    pub year: Option<&'query str>,
    /// Exact category name
    pub category: Option<&'query str>,
}

impl<'query> ExpenseFilter<'query> {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set month filter
    pub fn month(mut self, month: Option<&'query str>) -> Self {
        self.month = month;
        self
    }

    /// Set year filter
    pub fn year(mut self, year: Option<&'query str>) -> Self {
        self.year = year;
        self
    }

    /// Set category filter
    pub fn category(mut self, category: Option<&'query str>) -> Self {
        self.category = category;
        self
    }

    /// Active month constraint, ignoring empty selections
    pub fn active_month(&self) -> Option<&'query str> {
        self.month.filter(|m| !m.is_empty())
    }

    /// Active year constraint, ignoring empty selections
    pub fn active_year(&self) -> Option<&'query str> {
        self.year.filter(|y| !y.is_empty())
    }

    /// Active category constraint, ignoring empty selections
    pub fn active_category(&self) -> Option<&'query str> {
        self.category.filter(|c| !c.is_empty())
    }

    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        self.active_month().is_none()
            && self.active_year().is_none()
            && self.active_category().is_none()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        let matches_month = self
            .active_month()
            .map_or(true, |m| format!("{:02}", expense.date.month()) == m);
        let matches_year = self
            .active_year()
            .map_or(true, |y| expense.date.year().to_string() == y);
        let matches_category = self
            .active_category()
            .map_or(true, |c| expense.category == c);

        matches_month && matches_year && matches_category
    }

    /// Records passing the filter, in input order
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        expenses.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
