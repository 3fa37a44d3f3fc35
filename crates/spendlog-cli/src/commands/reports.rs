//! Dashboard and report command implementations

use anyhow::Result;
use spendlog_core::money::format_currency;
use spendlog_core::{reports, Ledger};

use super::expenses::print_expense_table;
use super::truncate;

pub fn cmd_dashboard(ledger: &Ledger, json: bool) -> Result<()> {
    let stats = ledger.dashboard();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let currency = &ledger.config().currency;

    println!();
    println!("📊 Spendlog Dashboard");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total Expenses: {}", format_currency(stats.total, currency));
    println!(
        "   Monthly Avg:    {}",
        format_currency(stats.monthly_average, currency)
    );
    println!("   Total Count:    {}", stats.expense_count);
    println!("   Categories:     {}", stats.category_count);

    let recent = ledger.recent(5);
    if !recent.is_empty() {
        println!();
        println!("   Recent:");
        print_expense_table(ledger, &recent);
    }

    Ok(())
}

pub fn cmd_report_categories(ledger: &Ledger, json: bool) -> Result<()> {
    let analytics = ledger.category_analytics();

    if json {
        println!("{}", serde_json::to_string_pretty(&analytics)?);
        return Ok(());
    }

    println!();
    println!("📊 Spending by Category");
    println!("   ─────────────────────────────────────────────────────────────");

    if analytics.is_empty() {
        println!("   No spending recorded yet.");
        return Ok(());
    }

    let currency = &ledger.config().currency;
    println!(
        "   {:20} │ {:>14} │ {:>6} │ {:>5} │ {:>14}",
        "Category", "Amount", "%", "Count", "Avg"
    );
    println!("   ─────────────────────┼────────────────┼────────┼───────┼───────────────");
    for cat in &analytics {
        println!(
            "   {:20} │ {:>14} │ {:>5}% │ {:>5} │ {:>14}",
            truncate(&cat.category, 20),
            format_currency(cat.total, currency),
            cat.percentage,
            cat.count,
            format_currency(cat.average, currency)
        );
    }

    Ok(())
}

pub fn cmd_report_top(ledger: &Ledger, limit: Option<usize>, json: bool) -> Result<()> {
    let top = match limit {
        Some(limit) => reports::top_expenses(ledger.expenses(), limit),
        None => ledger.top_expenses(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&top)?);
        return Ok(());
    }

    println!();
    println!("🏆 Top Expenses");

    if top.is_empty() {
        println!("   No expenses recorded yet.");
        return Ok(());
    }

    print_expense_table(ledger, &top);
    Ok(())
}

pub fn cmd_report_averages(ledger: &Ledger, json: bool) -> Result<()> {
    let rates = ledger.average_spending();

    if json {
        println!("{}", serde_json::to_string_pretty(&rates)?);
        return Ok(());
    }

    let currency = &ledger.config().currency;

    println!();
    println!("📈 Average Spending");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Daily:   {}", format_currency(rates.daily, currency));
    println!("   Weekly:  {}", format_currency(rates.weekly, currency));
    println!("   Monthly: {}", format_currency(rates.monthly, currency));

    Ok(())
}

pub fn cmd_report_years(ledger: &Ledger, json: bool) -> Result<()> {
    let years = ledger.available_years();

    if json {
        println!("{}", serde_json::to_string_pretty(&years)?);
        return Ok(());
    }

    if years.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    for year in years {
        println!("{}", year);
    }
    Ok(())
}
