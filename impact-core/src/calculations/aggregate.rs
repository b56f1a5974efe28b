//! Monthly and per-category aggregation over purchase records.
//!
//! Every function here is a single pass over its input and recomputes its
//! result from scratch; nothing is cached between calls. An empty input
//! yields an empty result (or zeroed totals), never an error.
//!
//! The functions accept any iterator of `&PurchaseRecord`, so they work on a
//! whole ledger (`ledger.all()`) as well as on a filtered view
//! (`filtered.iter().copied()`).
//!
//! Sums saturate at `Decimal::MAX` instead of overflowing.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::average_or_zero;
use crate::models::{CategorySummary, DashboardTotals, MonthKey, MonthlySummary, PurchaseRecord};

/// Groups records by year-month.
///
/// # Returns
///
/// One summary per month that has at least one record, sorted ascending by
/// month key.
pub fn summarize_by_month<'a, I>(records: I) -> Vec<MonthlySummary>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    let mut months: BTreeMap<MonthKey, MonthlySummary> = BTreeMap::new();

    for record in records {
        let month = record.month();
        let summary = months.entry(month).or_insert_with(|| MonthlySummary {
            month,
            count: 0,
            total_spend: Decimal::ZERO,
            total_impact: Decimal::ZERO,
        });
        summary.count += 1;
        summary.total_spend = summary.total_spend.saturating_add(record.price);
        summary.total_impact = summary.total_impact.saturating_add(record.impact);
    }

    debug!(months = months.len(), "summarized purchases by month");
    months.into_values().collect()
}

/// Groups records by category.
///
/// Categories without purchases are omitted rather than zero-filled. The map
/// is keyed by category name, so iteration order is alphabetical.
pub fn summarize_by_category<'a, I>(records: I) -> BTreeMap<String, CategorySummary>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    let mut categories: BTreeMap<String, CategorySummary> = BTreeMap::new();

    for record in records {
        let summary = categories.entry(record.category.clone()).or_default();
        summary.count += 1;
        summary.total_spend = summary.total_spend.saturating_add(record.price);
        summary.total_impact = summary.total_impact.saturating_add(record.impact);
    }

    debug!(
        categories = categories.len(),
        "summarized purchases by category"
    );
    categories
}

/// Count, spend, impact and average impact per item across all records.
pub fn dashboard_totals<'a, I>(records: I) -> DashboardTotals
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    let (count, total_spend, total_impact) = records.into_iter().fold(
        (0usize, Decimal::ZERO, Decimal::ZERO),
        |(count, spend, impact), record| {
            (
                count + 1,
                spend.saturating_add(record.price),
                impact.saturating_add(record.impact),
            )
        },
    );

    DashboardTotals {
        count,
        total_spend,
        total_impact,
        average_impact: average_or_zero(total_impact, count),
    }
}

/// The `n` categories with the highest total impact.
///
/// Sorted by total impact descending; equal totals are ordered by category
/// name ascending so the result does not depend on input order.
pub fn top_categories<'a, I>(
    records: I,
    n: usize,
) -> Vec<(String, CategorySummary)>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    let mut ranked: Vec<(String, CategorySummary)> =
        summarize_by_category(records).into_iter().collect();

    ranked.sort_by(|(a_name, a), (b_name, b)| {
        match b.total_impact.cmp(&a.total_impact) {
            Ordering::Equal => a_name.cmp(b_name),
            other => other,
        }
    });
    ranked.truncate(n);
    ranked
}

/// Summary of the most recent month with purchases, if any.
pub fn latest_month<'a, I>(records: I) -> Option<MonthlySummary>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    summarize_by_month(records).pop()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn record(
        date: &str,
        category: &str,
        price: Decimal,
        impact: Decimal,
    ) -> PurchaseRecord {
        PurchaseRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category: category.to_string(),
            product_name: "—".to_string(),
            brand: Some("Acme".to_string()),
            price,
            impact,
            eco_brand: false,
        }
    }

    fn sample() -> Vec<PurchaseRecord> {
        vec![
            record("2025-03-02", "Electronics", dec!(100.00), dec!(35.00)),
            record("2025-01-15", "Groceries (Fresh/Local)", dec!(20.00), dec!(0.40)),
            record("2025-03-20", "Furniture", dec!(200.00), dec!(50.00)),
            record("2025-01-31", "Electronics", dec!(10.00), dec!(3.50)),
        ]
    }

    fn month(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    // =========================================================================
    // summarize_by_month
    // =========================================================================

    #[test]
    fn summarize_by_month_groups_and_sorts_ascending() {
        let summaries = summarize_by_month(&sample());

        assert_eq!(
            summaries,
            vec![
                MonthlySummary {
                    month: month("2025-01"),
                    count: 2,
                    total_spend: dec!(30.00),
                    total_impact: dec!(3.90),
                },
                MonthlySummary {
                    month: month("2025-03"),
                    count: 2,
                    total_spend: dec!(300.00),
                    total_impact: dec!(85.00),
                },
            ]
        );
    }

    #[test]
    fn summarize_by_month_sorts_across_years() {
        let records = vec![
            record("2025-01-01", "Other", dec!(1), dec!(0.10)),
            record("2024-12-31", "Other", dec!(1), dec!(0.10)),
        ];

        let months: Vec<String> = summarize_by_month(&records)
            .iter()
            .map(|s| s.month.to_string())
            .collect();

        assert_eq!(months, vec!["2024-12", "2025-01"]);
    }

    #[test]
    fn summarize_by_month_is_idempotent() {
        let records = sample();

        assert_eq!(summarize_by_month(&records), summarize_by_month(&records));
    }

    #[test]
    fn summarize_by_month_empty_input() {
        assert!(summarize_by_month(&Vec::<PurchaseRecord>::new()).is_empty());
    }

    // =========================================================================
    // summarize_by_category
    // =========================================================================

    #[test]
    fn summarize_by_category_omits_unused_categories() {
        let summaries = summarize_by_category(&sample());

        assert_eq!(summaries.len(), 3);
        assert!(!summaries.contains_key("Home Appliances"));
        assert_eq!(
            summaries["Electronics"],
            CategorySummary {
                count: 2,
                total_spend: dec!(110.00),
                total_impact: dec!(38.50),
            }
        );
    }

    #[test]
    fn summarize_by_category_empty_input() {
        assert!(summarize_by_category(&Vec::<PurchaseRecord>::new()).is_empty());
    }

    #[test]
    fn summarize_by_category_accepts_filtered_views() {
        let records = sample();
        let march: Vec<&PurchaseRecord> = records
            .iter()
            .filter(|r| r.month() == month("2025-03"))
            .collect();

        let summaries = summarize_by_category(march.iter().copied());

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries["Electronics"].count, 1);
    }

    // =========================================================================
    // dashboard_totals
    // =========================================================================

    #[test]
    fn dashboard_totals_sums_everything() {
        let totals = dashboard_totals(&sample());

        assert_eq!(
            totals,
            DashboardTotals {
                count: 4,
                total_spend: dec!(330.00),
                total_impact: dec!(88.90),
                average_impact: dec!(22.23),
            }
        );
    }

    #[test]
    fn dashboard_totals_empty_input_is_all_zero() {
        let totals = dashboard_totals(&Vec::<PurchaseRecord>::new());

        assert_eq!(totals, DashboardTotals::default());
        assert_eq!(totals.average_impact, Decimal::ZERO);
    }

    #[test]
    fn huge_totals_saturate_instead_of_overflowing() {
        let records = vec![
            record("2025-01-05", "Furniture", Decimal::MAX, Decimal::MAX),
            record("2025-01-06", "Furniture", Decimal::MAX, Decimal::MAX),
        ];

        let totals = dashboard_totals(&records);
        let months = summarize_by_month(&records);
        let categories = summarize_by_category(&records);

        assert_eq!(totals.count, 2);
        assert_eq!(totals.total_spend, Decimal::MAX);
        assert_eq!(totals.total_impact, Decimal::MAX);
        assert_eq!(months[0].total_spend, Decimal::MAX);
        assert_eq!(categories["Furniture"].total_impact, Decimal::MAX);
    }

    // =========================================================================
    // top_categories
    // =========================================================================

    #[test]
    fn top_categories_orders_by_impact_descending() {
        let top = top_categories(&sample(), 3);

        let names: Vec<&str> = top.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Furniture", "Electronics", "Groceries (Fresh/Local)"]);
    }

    #[test]
    fn top_categories_breaks_ties_by_name() {
        let records = vec![
            record("2025-01-01", "Personal Care", dec!(10), dec!(5.00)),
            record("2025-01-02", "Furniture", dec!(20), dec!(5.00)),
            record("2025-01-03", "Books & Stationery", dec!(30), dec!(5.00)),
            record("2025-01-04", "Electronics", dec!(1), dec!(1.00)),
        ];

        let top = top_categories(&records, 3);

        let names: Vec<&str> = top.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Books & Stationery", "Furniture", "Personal Care"]);
    }

    #[test]
    fn top_categories_returns_fewer_when_not_enough() {
        let records = vec![record("2025-01-01", "Electronics", dec!(1), dec!(0.35))];

        assert_eq!(top_categories(&records, 3).len(), 1);
        assert!(top_categories(&Vec::<PurchaseRecord>::new(), 3).is_empty());
    }

    // =========================================================================
    // latest_month
    // =========================================================================

    #[test]
    fn latest_month_is_most_recent() {
        let latest = latest_month(&sample()).unwrap();

        assert_eq!(latest.month, month("2025-03"));
        assert_eq!(latest.total_impact, dec!(85.00));
    }

    #[test]
    fn latest_month_empty_input() {
        assert_eq!(latest_month(&Vec::<PurchaseRecord>::new()), None);
    }
}
