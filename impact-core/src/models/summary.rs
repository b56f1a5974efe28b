use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MonthKey;

/// Totals for one year-month. Derived on request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub count: usize,
    pub total_spend: Decimal,
    pub total_impact: Decimal,
}

/// Totals for one category with at least one purchase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub count: usize,
    pub total_spend: Decimal,
    pub total_impact: Decimal,
}

/// Headline figures shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardTotals {
    pub count: usize,
    pub total_spend: Decimal,
    pub total_impact: Decimal,
    /// `total_impact / count` rounded to cents; zero for an empty set.
    pub average_impact: Decimal,
}
