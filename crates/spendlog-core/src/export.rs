//! CSV export of a filtered expense set
//!
//! Document layout:
//!
//! ```text
//! Date,Description,Category,Amount
//! 2024-08-05,"Lunch at cafe",Food,450.5
//!
//! SUMMARY
//! "Food Total:",,,450.50
//! "GRAND TOTAL:",,,450.50
//! ```
//!
//! The description is always quoted; the other record fields never are.
//! Record amounts are written without trailing zeros, summary amounts with
//! exactly two decimals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::ExpenseFilter;
use crate::models::{CategoryTotals, Expense};
use crate::money::{format_fixed, DATE_FORMAT};

/// Header row of the export document
pub const EXPORT_HEADER: &str = "Date,Description,Category,Amount";

/// Marker line that starts the summary block
pub const SUMMARY_MARKER: &str = "SUMMARY";

const BASE_FILENAME: &str = "expenses";

/// An encoded export ready to hand to whoever saves it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Suggested filename, derived from the active filters
    pub filename: String,
    pub content: String,
    pub record_count: usize,
    pub grand_total: Decimal,
}

/// Encode records and their summary into the export document text.
///
/// Fails with [`Error::EmptyExport`] when there are no records.
pub fn encode(
    expenses: &[Expense],
    category_totals: &CategoryTotals,
    grand_total: Decimal,
) -> Result<String> {
    if expenses.is_empty() {
        return Err(Error::EmptyExport);
    }

    let mut csv = String::from(EXPORT_HEADER);
    csv.push('\n');

    let rows: Vec<String> = expenses
        .iter()
        .map(|e| {
            format!(
                "{},{},{},{}",
                e.date.format(DATE_FORMAT),
                quote_field(&e.description),
                e.category,
                e.amount.normalize()
            )
        })
        .collect();
    csv.push_str(&rows.join("\n"));

    csv.push_str("\n\n");
    csv.push_str(SUMMARY_MARKER);
    for entry in category_totals.iter() {
        csv.push_str(&format!(
            "\n{},,,{}",
            quote_field(&format!("{} Total:", entry.category)),
            format_fixed(entry.total, 2)
        ));
    }
    csv.push_str(&format!(
        "\n{},,,{}",
        quote_field("GRAND TOTAL:"),
        format_fixed(grand_total, 2)
    ));

    Ok(csv)
}

/// Suggested export filename: `expenses[_<year>][_<month>].csv`
pub fn export_filename(filter: &ExpenseFilter<'_>) -> String {
    let mut filename = String::from(BASE_FILENAME);
    if let Some(year) = filter.active_year() {
        filename.push('_');
        filename.push_str(year);
    }
    if let Some(month) = filter.active_month() {
        filename.push('_');
        filename.push_str(month);
    }
    filename.push_str(".csv");
    filename
}

/// Wrap a field in double quotes, doubling any quotes inside it
fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
