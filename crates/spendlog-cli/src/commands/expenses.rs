//! Expense command implementations

use anyhow::{Context, Result};
use chrono::Utc;
use spendlog_core::money::{format_currency, DATE_FORMAT};
use spendlog_core::{Expense, ExpenseDraft, ExpenseId, Ledger};

use super::{to_filter, truncate};
use crate::cli::FilterArgs;

/// Field overrides for `edit`; `None` keeps the current value
#[derive(Debug, Default)]
pub struct ExpenseEdits {
    pub amount: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

pub fn cmd_add(
    ledger: &mut Ledger,
    amount: &str,
    description: &str,
    category: Option<&str>,
    date: Option<&str>,
) -> Result<Expense> {
    let category = match category {
        Some(c) => c.to_string(),
        None => ledger
            .categories()
            .first()
            .cloned()
            .unwrap_or_else(|| ledger.config().fallback_category.clone()),
    };
    let date = date
        .map(str::to_string)
        .unwrap_or_else(|| Utc::now().date_naive().format(DATE_FORMAT).to_string());

    let expense = ledger
        .add_expense(&ExpenseDraft::new(amount, description, category, date))
        .context("Expense not added")?;

    println!(
        "✅ Added expense {} : {} {} [{}] on {}",
        expense.id,
        format_currency(expense.amount, &ledger.config().currency),
        expense.description,
        expense.category,
        expense.date
    );
    Ok(expense)
}

pub fn cmd_edit(ledger: &mut Ledger, id: ExpenseId, edits: ExpenseEdits) -> Result<()> {
    let Some(existing) = ledger.expense(id) else {
        println!("No expense with id {}", id);
        return Ok(());
    };

    let mut draft = ExpenseDraft::from_expense(existing);
    if let Some(amount) = edits.amount {
        draft.amount = amount;
    }
    if let Some(description) = edits.description {
        draft.description = description;
    }
    if let Some(category) = edits.category {
        draft.category = category;
    }
    if let Some(date) = edits.date {
        draft.date = date;
    }

    ledger
        .update_expense(id, &draft)
        .context("Expense not updated")?;
    println!("✅ Updated expense {}", id);
    Ok(())
}

pub fn cmd_delete(ledger: &mut Ledger, id: ExpenseId) {
    if ledger.remove_expense(id) {
        println!("✅ Deleted expense {}", id);
    } else {
        println!("No expense with id {}", id);
    }
}

pub fn cmd_list(ledger: &Ledger, filter: &FilterArgs, json: bool) -> Result<()> {
    let filter = to_filter(filter);
    let expenses = ledger.filtered(&filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&expenses)?);
        return Ok(());
    }

    if expenses.is_empty() {
        println!("No expenses found.");
        return Ok(());
    }

    println!();
    println!("📋 Expenses ({})", expenses.len());
    print_expense_table(ledger, &expenses);
    println!(
        "   Total: {}",
        format_currency(ledger.total_amount(&filter), &ledger.config().currency)
    );

    Ok(())
}

pub fn cmd_recent(ledger: &Ledger, limit: usize, json: bool) -> Result<()> {
    let expenses = ledger.recent(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&expenses)?);
        return Ok(());
    }

    if expenses.is_empty() {
        println!("No expenses yet. Add one with 'spendlog add'.");
        return Ok(());
    }

    println!();
    println!("🕒 Recent Expenses");
    print_expense_table(ledger, &expenses);
    Ok(())
}

pub(crate) fn print_expense_table(ledger: &Ledger, expenses: &[Expense]) {
    println!("   ─────────────────────────────────────────────────────────────────────");
    println!(
        "   {:>5} │ {:10} │ {:28} │ {:15} │ {:>14}",
        "ID", "Date", "Description", "Category", "Amount"
    );
    println!("   ──────┼────────────┼──────────────────────────────┼─────────────────┼───────────────");
    for e in expenses {
        println!(
            "   {:>5} │ {:10} │ {:28} │ {:15} │ {:>14}",
            e.id,
            e.date,
            truncate(&e.description, 28),
            truncate(&e.category, 15),
            format_currency(e.amount, &ledger.config().currency)
        );
    }
}
