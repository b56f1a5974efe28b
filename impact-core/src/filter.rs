//! Month and category filters for the history view and exports.

use std::fmt;
use std::str::FromStr;

use crate::models::{MonthKey, ParseMonthKeyError, PurchaseRecord};

/// Value that selects every month or every category.
pub const ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Month(MonthKey),
}

impl MonthFilter {
    pub fn matches(&self, record: &PurchaseRecord) -> bool {
        match self {
            Self::All => true,
            Self::Month(key) => key.contains(record.date),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Month)
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Month(key) => write!(f, "{key}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, record: &PurchaseRecord) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => record.category == *name,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL) {
            Ok(Self::All)
        } else {
            Ok(Self::Named(s.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Records matching both filters, in their original order.
pub fn filter_records<'a>(
    records: &'a [PurchaseRecord],
    month: &MonthFilter,
    category: &CategoryFilter,
) -> Vec<&'a PurchaseRecord> {
    records
        .iter()
        .filter(|record| month.matches(record) && category.matches(record))
        .collect()
}
