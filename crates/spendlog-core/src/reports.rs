//! Spending aggregation and analytics
//!
//! Every function here is pure: it reads a slice of expenses (usually a
//! filtered set) and returns a derived view without touching any state.

use std::collections::BTreeSet;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::{CategoryBreakdown, CategoryTotal, CategoryTotals, Expense, SpendingRates};
use crate::money::format_fixed;

/// Default length of the top-expenses ranking
pub const DEFAULT_TOP_N: usize = 5;

/// Days in a month for the monthly spending rate (flat approximation)
const DAYS_PER_MONTH: i64 = 30;

const DAYS_PER_WEEK: i64 = 7;

/// Sum of all amounts, zero for an empty set.
///
/// Saturates at `Decimal::MAX` instead of overflowing.
pub fn total_amount(expenses: &[Expense]) -> Decimal {
    sum(expenses.iter().map(|e| e.amount))
}

fn sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sum of amounts grouped by exact category name, in first-seen order
pub fn category_totals(expenses: &[Expense]) -> CategoryTotals {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => entry.total = entry.total.saturating_add(expense.amount),
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }
    CategoryTotals(totals)
}

/// Per-category totals, counts and share of the grand total.
///
/// Sorted by total, largest first. The sort is stable, so categories with
/// equal totals stay in first-seen order. When the grand total is zero every
/// percentage is "0".
pub fn category_analytics(expenses: &[Expense]) -> Vec<CategoryBreakdown> {
    let mut groups: Vec<(String, Decimal, usize)> = Vec::new();
    for expense in expenses {
        match groups.iter_mut().find(|(name, _, _)| *name == expense.category) {
            Some((_, total, count)) => {
                *total = total.saturating_add(expense.amount);
                *count += 1;
            }
            None => groups.push((expense.category.clone(), expense.amount, 1)),
        }
    }

    let grand_total = sum(groups.iter().map(|(_, total, _)| *total));

    let mut breakdown: Vec<CategoryBreakdown> = groups
        .into_iter()
        .map(|(category, total, count)| CategoryBreakdown {
            percentage: percentage_of(total, grand_total),
            average: total / Decimal::from(count),
            category,
            total,
            count,
        })
        .collect();

    breakdown.sort_by(|a, b| b.total.cmp(&a.total));
    breakdown
}

fn percentage_of(part: Decimal, whole: Decimal) -> String {
    if whole > Decimal::ZERO {
        // part <= whole, so the share stays within 0..=100
        format_fixed(part / whole * Decimal::ONE_HUNDRED, 1)
    } else {
        "0".to_string()
    }
}

/// The `limit` largest expenses, largest first.
///
/// Equal amounts keep their relative order from the input.
pub fn top_expenses(expenses: &[Expense], limit: usize) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
    sorted.truncate(limit);
    sorted
}

/// Daily, weekly and monthly spending rates.
///
/// The daily rate divides the total by the number of days between the
/// earliest and latest expense, floored to one day. Weekly is seven days of
/// that rate and monthly a flat thirty.
pub fn average_spending(expenses: &[Expense]) -> SpendingRates {
    let (Some(earliest), Some(latest)) = (
        expenses.iter().map(|e| e.date).min(),
        expenses.iter().map(|e| e.date).max(),
    ) else {
        return SpendingRates::default();
    };

    let day_span = (latest - earliest).num_days().max(1);
    let daily = total_amount(expenses) / Decimal::from(day_span);

    SpendingRates {
        daily,
        weekly: daily.saturating_mul(Decimal::from(DAYS_PER_WEEK)),
        monthly: daily.saturating_mul(Decimal::from(DAYS_PER_MONTH)),
    }
}

/// Distinct years that have expenses, most recent first
pub fn available_years(expenses: &[Expense]) -> Vec<i32> {
    let years: BTreeSet<i32> = expenses.iter().map(|e| e.date.year()).collect();
    years.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn expense(id: u64, amount: Decimal, category: &str, date: &str) -> Expense {
        Expense {
            id: ExpenseId(id),
            amount,
            description: format!("expense {}", id),
            category: category.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        }
    }

    /// The five records the app ships with as sample data
    fn sample() -> Vec<Expense> {
        vec![
            expense(1, dec!(450.50), "Food", "2024-08-05"),
            expense(2, dec!(80.00), "Transportation", "2024-08-04"),
            expense(3, dec!(800.00), "Entertainment", "2024-07-30"),
            expense(4, dec!(1200.00), "Food", "2024-08-03"),
            expense(5, dec!(250.00), "Transportation", "2024-08-02"),
        ]
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(total_amount(&sample()), dec!(2780.50));
        assert_eq!(total_amount(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_category_totals_first_seen_order() {
        let totals = category_totals(&sample());
        let names: Vec<_> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(names, ["Food", "Transportation", "Entertainment"]);
        assert_eq!(totals.get("Food"), Some(dec!(1650.50)));
        assert_eq!(totals.get("Transportation"), Some(dec!(330.00)));
        assert_eq!(totals.get("Bills"), None);
    }

    #[test]
    fn test_category_analytics_two_records() {
        let records = vec![
            expense(1, dec!(450.50), "Food", "2024-08-05"),
            expense(2, dec!(80.00), "Transportation", "2024-08-04"),
        ];
        assert_eq!(total_amount(&records), dec!(530.50));

        let analytics = category_analytics(&records);
        assert_eq!(analytics.len(), 2);
        assert_eq!(analytics[0].category, "Food");
        assert_eq!(analytics[0].total, dec!(450.50));
        assert_eq!(analytics[0].count, 1);
        assert_eq!(analytics[0].percentage, "84.9");
        assert_eq!(analytics[1].category, "Transportation");
        assert_eq!(analytics[1].total, dec!(80.00));
        assert_eq!(analytics[1].count, 1);
        assert_eq!(analytics[1].percentage, "15.1");
    }

    #[test]
    fn test_category_analytics_sorted_desc_with_average() {
        let analytics = category_analytics(&sample());
        let names: Vec<_> = analytics.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, ["Food", "Entertainment", "Transportation"]);
        assert_eq!(analytics[0].count, 2);
        assert_eq!(analytics[0].average, dec!(825.25));
        assert_eq!(analytics[2].average, dec!(165));
    }

    #[test]
    fn test_category_analytics_percentages_sum_to_100() {
        let analytics = category_analytics(&sample());
        let sum: Decimal = analytics
            .iter()
            .map(|c| c.percentage.parse::<Decimal>().unwrap())
            .sum();
        let tolerance = dec!(0.05) * Decimal::from(analytics.len());
        assert!((sum - Decimal::ONE_HUNDRED).abs() <= tolerance, "sum was {}", sum);
    }

    #[test]
    fn test_category_analytics_ties_keep_first_seen_order() {
        let records = vec![
            expense(1, dec!(10), "Bills", "2024-08-01"),
            expense(2, dec!(10), "Food", "2024-08-01"),
            expense(3, dec!(30), "Shopping", "2024-08-01"),
        ];
        let names: Vec<_> = category_analytics(&records)
            .into_iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(names, ["Shopping", "Bills", "Food"]);
    }

    #[test]
    fn test_category_analytics_zero_total() {
        let records = vec![
            expense(1, dec!(0), "Food", "2024-08-01"),
            expense(2, dec!(0), "Bills", "2024-08-02"),
        ];
        let analytics = category_analytics(&records);
        assert_eq!(analytics.len(), 2);
        assert!(analytics.iter().all(|c| c.percentage == "0"));
    }

    #[test]
    fn test_category_analytics_empty() {
        assert!(category_analytics(&[]).is_empty());
    }

    #[test]
    fn test_top_expenses() {
        let top = top_expenses(&sample(), DEFAULT_TOP_N);
        let amounts: Vec<_> = top.iter().map(|e| e.amount).collect();
        assert_eq!(
            amounts,
            vec![dec!(1200), dec!(800), dec!(450.50), dec!(250), dec!(80)]
        );

        let top = top_expenses(&sample(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, ExpenseId(4));

        assert!(top_expenses(&[], 5).is_empty());
    }

    #[test]
    fn test_top_expenses_length_is_min_of_n_and_len() {
        let records = &sample()[..3];
        assert_eq!(top_expenses(records, 5).len(), 3);
    }

    #[test]
    fn test_top_expenses_ties_stable() {
        let records = vec![
            expense(1, dec!(5), "Food", "2024-08-01"),
            expense(2, dec!(9), "Food", "2024-08-01"),
            expense(3, dec!(5), "Food", "2024-08-01"),
        ];
        let ids: Vec<_> = top_expenses(&records, 5).iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_average_spending() {
        // 2024-07-30 to 2024-08-05 is six days
        let rates = average_spending(&sample());
        let daily = dec!(2780.50) / dec!(6);
        assert_eq!(rates.daily, daily);
        assert_eq!(rates.weekly, daily * dec!(7));
        assert_eq!(rates.monthly, daily * dec!(30));
    }

    #[test]
    fn test_average_spending_single_record() {
        let rates = average_spending(&[expense(1, dec!(42), "Food", "2024-08-01")]);
        assert_eq!(rates.daily, dec!(42));
        assert_eq!(rates.weekly, dec!(294));
        assert_eq!(rates.monthly, dec!(1260));
    }

    #[test]
    fn test_average_spending_same_day() {
        let records = vec![
            expense(1, dec!(10), "Food", "2024-08-01"),
            expense(2, dec!(20), "Food", "2024-08-01"),
        ];
        assert_eq!(average_spending(&records).daily, dec!(30));
    }

    #[test]
    fn test_average_spending_empty() {
        let rates = average_spending(&[]);
        assert_eq!(rates.daily, Decimal::ZERO);
        assert_eq!(rates.weekly, Decimal::ZERO);
        assert_eq!(rates.monthly, Decimal::ZERO);
    }

    #[test]
    fn test_available_years() {
        let mut records = sample();
        records.push(expense(6, dec!(1), "Food", "2022-01-01"));
        records.push(expense(7, dec!(1), "Food", "2023-06-01"));
        assert_eq!(available_years(&records), vec![2024, 2023, 2022]);
    }

    #[test]
    fn test_huge_amounts_do_not_overflow() {
        let records = vec![
            expense(1, Decimal::MAX, "Food", "2024-08-01"),
            expense(2, Decimal::MAX, "Bills", "2024-08-02"),
            expense(3, dec!(10), "Food", "2024-08-02"),
        ];

        assert_eq!(total_amount(&records), Decimal::MAX);

        let analytics = category_analytics(&records);
        assert_eq!(analytics.len(), 2);
        assert_eq!(analytics[0].total, Decimal::MAX);

        let rates = average_spending(&records);
        assert_eq!(rates.daily, Decimal::MAX);
        assert_eq!(rates.monthly, Decimal::MAX);
    }
}
