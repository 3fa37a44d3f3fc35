//! Export command implementation

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use spendlog_core::money::format_currency;
use spendlog_core::{Error, Ledger};

use super::to_filter;
use crate::cli::FilterArgs;

/// Export filtered expenses.
///
/// Writes `<dir>/<suggested filename>` when `dir` is given, otherwise prints
/// the document to stdout. Returns the written path, if any.
pub fn cmd_export(
    ledger: &Ledger,
    filter: &FilterArgs,
    dir: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let filter = to_filter(filter);

    let document = match ledger.export(&filter) {
        Ok(document) => document,
        Err(Error::EmptyExport) => {
            println!("⚠️  No expenses to export for the selected filters.");
            return Ok(None);
        }
        Err(e) => return Err(e).context("Export failed"),
    };

    let Some(dir) = dir else {
        println!("{}", document.content);
        return Ok(None);
    };

    let path = dir.join(&document.filename);
    let mut file = File::create(&path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    file.write_all(document.content.as_bytes())?;

    println!(
        "✅ Exported {} expenses to {}",
        document.record_count,
        path.display()
    );
    println!(
        "   Grand total: {}",
        format_currency(document.grand_total, &ledger.config().currency)
    );

    Ok(Some(path))
}
