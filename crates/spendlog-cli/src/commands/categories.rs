//! Category command implementations

use anyhow::{Context, Result};
use spendlog_core::Ledger;

pub fn cmd_categories_list(ledger: &Ledger, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ledger.categories())?);
        return Ok(());
    }

    println!();
    println!("🏷️  Categories");
    println!("   ─────────────────────────────────────────────────────────────");
    for name in ledger.categories() {
        let count = ledger
            .expenses()
            .iter()
            .filter(|e| &e.category == name)
            .count();
        let marker = if *name == ledger.config().fallback_category {
            " (fallback)"
        } else {
            ""
        };
        if count > 0 {
            println!("   • {}{} ({} expenses)", name, marker, count);
        } else {
            println!("   • {}{}", name, marker);
        }
    }

    Ok(())
}

pub fn cmd_categories_add(ledger: &mut Ledger, name: &str) -> Result<()> {
    ledger
        .add_category(name)
        .with_context(|| format!("Category '{}' not added", name))?;
    println!("✅ Added category '{}'", name);
    Ok(())
}

pub fn cmd_categories_remove(ledger: &mut Ledger, name: &str) -> Result<()> {
    let reassigned = ledger
        .remove_category(name)
        .with_context(|| format!("Category '{}' not removed", name))?;

    println!(
        "✅ Removed category '{}' ({} expenses moved to '{}')",
        name,
        reassigned,
        ledger.config().fallback_category
    );
    Ok(())
}
