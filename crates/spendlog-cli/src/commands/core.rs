//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_ledger` - Load the ledger snapshot file (or start empty)
//! - `save_ledger` - Write the ledger snapshot file
//! - `cmd_init` - Create a new ledger file

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use spendlog_core::{Ledger, LedgerConfig, Snapshot};
use tracing::debug;

/// Load the ledger from its snapshot file.
///
/// A missing file gives a fresh ledger seeded from config.
pub fn open_ledger(path: &Path, config: LedgerConfig) -> Result<Ledger> {
    if !path.exists() {
        debug!(path = %path.display(), "No ledger file yet, starting empty");
        return Ok(Ledger::new(config));
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ledger file: {}", path.display()))?;
    let snapshot = Snapshot::from_json(&json)
        .with_context(|| format!("Ledger file is not a valid snapshot: {}", path.display()))?;

    Ledger::from_snapshot(snapshot, config)
        .with_context(|| format!("Failed to restore ledger: {}", path.display()))
}

/// Write the ledger snapshot file
pub fn save_ledger(path: &Path, ledger: &Ledger) -> Result<()> {
    let json = ledger
        .snapshot()
        .to_json()
        .context("Failed to serialize ledger")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write ledger file: {}", path.display()))?;
    debug!(path = %path.display(), expenses = ledger.expenses().len(), "Saved ledger");
    Ok(())
}

pub fn cmd_init(path: &Path, config: LedgerConfig, sample: bool, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Ledger file already exists: {}\nUse --force to overwrite it.",
            path.display()
        );
    }

    println!("🔧 Initializing ledger at {}...", path.display());

    let ledger = if sample {
        Ledger::with_sample_data(config).context("Failed to seed sample data")?
    } else {
        Ledger::new(config)
    };
    save_ledger(path, &ledger)?;

    println!("   Categories: {}", ledger.categories().join(", "));
    if sample {
        println!("   Seeded {} sample expenses", ledger.expenses().len());
    }
    println!("✅ Ledger initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add an expense: spendlog add -a 120 -d \"Groceries\" -c Food");
    println!("  2. See where it went: spendlog report categories");

    Ok(())
}
