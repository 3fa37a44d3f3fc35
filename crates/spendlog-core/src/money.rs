//! Money and date primitives
//!
//! Amounts are `rust_decimal::Decimal` and dates are `chrono::NaiveDate`.
//! This module only adds the parsing and formatting rules the ledger needs
//! on top of those types.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// ISO calendar date format used for input and export
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted amount, in whole units
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000_000;

/// Parse an amount entered as text.
///
/// Returns `None` for empty, non-numeric, negative or out-of-range input.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let amount = Decimal::from_str(trimmed).ok()?;
    is_valid_amount(amount).then_some(amount)
}

/// True for amounts between zero and [`MAX_AMOUNT_UNITS`], inclusive
pub fn is_valid_amount(amount: Decimal) -> bool {
    (amount.is_zero() || amount.is_sign_positive()) && amount <= Decimal::from(MAX_AMOUNT_UNITS)
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Round half away from zero and pad to exactly `places` decimals
pub fn format_fixed(amount: Decimal, places: u32) -> String {
    let mut rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded.to_string()
}

/// Digit grouping style for display amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 12,34,567.00
    #[default]
    Indian,
    /// 1,234,567.00
    Western,
}

impl Grouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Indian => "indian",
            Self::Western => "western",
        }
    }
}

impl std::str::FromStr for Grouping {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "indian" | "in" | "lakh" => Ok(Self::Indian),
            "western" | "international" => Ok(Self::Western),
            _ => Err(format!("Unknown grouping: {}", s)),
        }
    }
}

impl std::fmt::Display for Grouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How amounts are rendered for people (not for export)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: Grouping,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            grouping: Grouping::Indian,
        }
    }
}

/// Format an amount with currency symbol, two decimals and digit grouping
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    let fixed = format_fixed(amount.abs(), 2);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_digits(int_part, format.grouping);
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}.{}", sign, format.symbol, grouped, frac_part)
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let group_size = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group_size);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
