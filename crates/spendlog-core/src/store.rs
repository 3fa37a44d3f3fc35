//! Expense store
//!
//! Owns the expense records in insertion order. Insertion order is also the
//! display order for "recent" views. Identifiers come from a per-store
//! counter, so they never collide within a session.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Expense, ExpenseDraft, ExpenseId};
use crate::money::{is_valid_amount, parse_amount, parse_date};

#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: u64,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from existing records, keeping their ids.
    ///
    /// The id counter resumes above the largest restored id. Fails with
    /// [`Error::Snapshot`] on a repeated id or an out-of-range amount, and
    /// with [`Error::IdsExhausted`] when no id is left above the largest one.
    pub fn from_records(expenses: Vec<Expense>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(expenses.len());
        for expense in &expenses {
            if !seen.insert(expense.id) {
                return Err(Error::Snapshot(format!("duplicate expense id {}", expense.id)));
            }
            if !is_valid_amount(expense.amount) {
                return Err(Error::Snapshot(format!(
                    "expense {} has out-of-range amount {}",
                    expense.id, expense.amount
                )));
            }
        }

        let next_id = match expenses.iter().map(|e| e.id.0).max() {
            Some(max) => max.checked_add(1).ok_or(Error::IdsExhausted)?,
            None => 0,
        };
        Ok(Self { expenses, next_id })
    }

    /// Validate a draft and append it as a new expense
    pub fn add(&mut self, draft: &ExpenseDraft) -> Result<Expense> {
        let (amount, date) = validate_draft(draft)?;

        let expense = Expense {
            id: self.allocate_id()?,
            amount,
            description: draft.description.clone(),
            category: draft.category.clone(),
            date,
        };
        self.expenses.push(expense.clone());

        debug!(
            id = %expense.id,
            amount = %expense.amount,
            category = %expense.category,
            "Added expense"
        );
        Ok(expense)
    }

    /// Replace every field of the expense with `id`.
    ///
    /// Returns `Ok(false)` without changing anything when `id` is unknown.
    /// Invalid field values are rejected and the record is left as it was.
    pub fn update(&mut self, id: ExpenseId, draft: &ExpenseDraft) -> Result<bool> {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "Update skipped, expense not found");
            return Ok(false);
        };

        let (amount, date) = validate_draft(draft)?;
        self.expenses[index] = Expense {
            id,
            amount,
            description: draft.description.clone(),
            category: draft.category.clone(),
            date,
        };

        debug!(id = %id, "Updated expense");
        Ok(true)
    }

    /// Delete the expense with `id`; returns false if there was none
    pub fn remove(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        let removed = self.expenses.len() != before;
        debug!(id = %id, removed, "Remove expense");
        removed
    }

    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Last `limit` expenses added, newest first
    pub fn recent(&self, limit: usize) -> Vec<Expense> {
        self.expenses.iter().rev().take(limit).cloned().collect()
    }

    /// Rewrite the category of every expense filed under `from`.
    ///
    /// Returns the number of records changed.
    pub fn reassign_category(&mut self, from: &str, to: &str) -> usize {
        let mut changed = 0;
        for expense in self.expenses.iter_mut().filter(|e| e.category == from) {
            expense.category = to.to_string();
            changed += 1;
        }
        changed
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    fn allocate_id(&mut self) -> Result<ExpenseId> {
        let id = ExpenseId(self.next_id);
        self.next_id = self.next_id.checked_add(1).ok_or(Error::IdsExhausted)?;
        Ok(id)
    }
}

/// Check required fields and coerce amount and date
fn validate_draft(draft: &ExpenseDraft) -> Result<(Decimal, NaiveDate)> {
    let Some(amount) = parse_amount(&draft.amount) else {
        warn!(amount = %draft.amount, "Rejected expense with invalid amount");
        return Err(Error::InvalidAmount(draft.amount.clone()));
    };
    if draft.description.trim().is_empty() {
        warn!("Rejected expense with empty description");
        return Err(Error::EmptyDescription);
    }
    let Some(date) = parse_date(&draft.date) else {
        warn!(date = %draft.date, "Rejected expense with invalid date");
        return Err(Error::InvalidDate(draft.date.clone()));
    };
    Ok((amount, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft(amount: &str, description: &str, category: &str, date: &str) -> ExpenseDraft {
        ExpenseDraft::new(amount, description, category, date)
    }

    #[test]
    fn test_add_appends_with_coerced_fields() {
        let mut store = ExpenseStore::new();
        let expense = store
            .add(&draft("450.50", "Lunch at cafe", "Food", "2024-08-05"))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0], expense);
        assert_eq!(expense.amount, dec!(450.50));
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 8, 5).unwrap());
        assert_eq!(expense.category, "Food");
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = ExpenseStore::new();
        let a = store.add(&draft("1", "a", "Food", "2024-01-01")).unwrap();
        let b = store.add(&draft("2", "b", "Food", "2024-01-01")).unwrap();
        store.remove(a.id);
        let c = store.add(&draft("3", "c", "Food", "2024-01-01")).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert_ne!(b.id, c.id);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut store = ExpenseStore::new();

        assert!(matches!(
            store.add(&draft("", "Lunch", "Food", "2024-08-05")),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            store.add(&draft("abc", "Lunch", "Food", "2024-08-05")),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            store.add(&draft("10", "", "Food", "2024-08-05")),
            Err(Error::EmptyDescription)
        ));
        assert!(matches!(
            store.add(&draft("10", "Lunch", "Food", "yesterday")),
            Err(Error::InvalidDate(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_does_not_check_category() {
        let mut store = ExpenseStore::new();
        let expense = store
            .add(&draft("10", "Mystery", "Not A Category", "2024-08-05"))
            .unwrap();
        assert_eq!(expense.category, "Not A Category");
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let mut store = ExpenseStore::new();
        let original = store.add(&draft("10", "Lunch", "Food", "2024-08-05")).unwrap();

        let updated = store
            .update(original.id, &draft("12.75", "Dinner", "Entertainment", "2024-08-06"))
            .unwrap();
        assert!(updated);

        let expense = store.get(original.id).unwrap();
        assert_eq!(expense.amount, dec!(12.75));
        assert_eq!(expense.description, "Dinner");
        assert_eq!(expense.category, "Entertainment");
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 8, 6).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = ExpenseStore::new();
        store.add(&draft("10", "Lunch", "Food", "2024-08-05")).unwrap();
        let before = store.all().to_vec();

        let updated = store
            .update(ExpenseId(999), &draft("1", "x", "Food", "2024-08-05"))
            .unwrap();
        assert!(!updated);
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_update_invalid_leaves_record() {
        let mut store = ExpenseStore::new();
        let original = store.add(&draft("10", "Lunch", "Food", "2024-08-05")).unwrap();

        let result = store.update(original.id, &draft("ten", "Lunch", "Food", "2024-08-05"));
        assert!(result.is_err());
        assert_eq!(store.get(original.id), Some(&original));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = ExpenseStore::new();
        let a = store.add(&draft("10", "a", "Food", "2024-08-05")).unwrap();
        store.add(&draft("20", "b", "Food", "2024-08-05")).unwrap();

        assert!(store.remove(a.id));
        let once = store.all().to_vec();
        assert!(!store.remove(a.id));
        assert_eq!(store.all(), once.as_slice());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_recent_newest_first() {
        let mut store = ExpenseStore::new();
        for i in 1..=7 {
            store
                .add(&draft(&i.to_string(), &format!("item {}", i), "Food", "2024-08-01"))
                .unwrap();
        }

        let recent = store.recent(5);
        let descriptions: Vec<_> = recent.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["item 7", "item 6", "item 5", "item 4", "item 3"]);
    }

    #[test]
    fn test_reassign_category() {
        let mut store = ExpenseStore::new();
        store.add(&draft("1", "a", "Food", "2024-08-01")).unwrap();
        store.add(&draft("2", "b", "Bills", "2024-08-01")).unwrap();
        store.add(&draft("3", "c", "Food", "2024-08-01")).unwrap();

        assert_eq!(store.reassign_category("Food", "Other"), 2);
        assert!(store.all().iter().all(|e| e.category != "Food"));
        assert_eq!(store.all()[1].category, "Bills");
    }

    #[test]
    fn test_from_records_resumes_ids() {
        let mut store = ExpenseStore::new();
        store.add(&draft("1", "a", "Food", "2024-08-01")).unwrap();
        store.add(&draft("2", "b", "Food", "2024-08-01")).unwrap();

        let mut restored = ExpenseStore::from_records(store.all().to_vec()).unwrap();
        let next = restored.add(&draft("3", "c", "Food", "2024-08-01")).unwrap();
        assert_eq!(next.id, ExpenseId(2));
    }

    fn record(id: u64, amount: Decimal) -> Expense {
        Expense {
            id: ExpenseId(id),
            amount,
            description: format!("expense {}", id),
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
        }
    }

    #[test]
    fn test_from_records_rejects_duplicate_ids() {
        let result = ExpenseStore::from_records(vec![record(3, dec!(10)), record(3, dec!(20))]);
        assert!(matches!(result, Err(Error::Snapshot(_))));
    }

    #[test]
    fn test_from_records_rejects_out_of_range_amount() {
        let result = ExpenseStore::from_records(vec![record(1, Decimal::MAX)]);
        assert!(matches!(result, Err(Error::Snapshot(_))));

        let result = ExpenseStore::from_records(vec![record(1, dec!(-5))]);
        assert!(matches!(result, Err(Error::Snapshot(_))));
    }

    #[test]
    fn test_from_records_max_id() {
        let result = ExpenseStore::from_records(vec![record(u64::MAX, dec!(1))]);
        assert!(matches!(result, Err(Error::IdsExhausted)));
    }

    #[test]
    fn test_add_when_ids_exhausted() {
        let mut store = ExpenseStore::from_records(vec![record(u64::MAX - 1, dec!(1))]).unwrap();
        let result = store.add(&draft("1", "late", "Food", "2024-08-01"));

        assert!(matches!(result, Err(Error::IdsExhausted)));
        assert_eq!(store.len(), 1);
    }
}
