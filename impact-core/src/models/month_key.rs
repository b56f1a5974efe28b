use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not a `YYYY-MM` month key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid month '{0}', expected YYYY-MM")]
pub struct ParseMonthKeyError(pub String);

/// A calendar year-month used to group purchases.
///
/// Ordering is chronological (year first, then month). The display form is
/// `YYYY-MM`; years outside 0..=9999 keep all their digits and a leading `-`
/// when negative (`10000-01`, `-0001-12`), and parse back the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

fn month_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(-?\d{4,})-(0[1-9]|1[0-2])$").expect("month key pattern is valid")
    })
}

impl MonthKey {
    /// Truncates a date to its year-month.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns true if `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let caps = month_pattern()
            .captures(trimmed)
            .ok_or_else(|| ParseMonthKeyError(s.to_string()))?;

        let year = caps[1]
            .parse()
            .map_err(|_| ParseMonthKeyError(s.to_string()))?;
        let month = caps[2]
            .parse()
            .map_err(|_| ParseMonthKeyError(s.to_string()))?;

        Ok(Self { year, month })
    }
}

impl TryFrom<String> for MonthKey {
    type Error = ParseMonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}", self.year.unsigned_abs(), self.month)
        } else {
            write!(f, "{:04}-{:02}", self.year, self.month)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_date_truncates_to_month() {
        let key = MonthKey::from_date(date(2025, 3, 14));

        assert_eq!(key.year(), 2025);
        assert_eq!(key.month(), 3);
        assert_eq!(key.to_string(), "2025-03");
    }

    #[test]
    fn parse_accepts_zero_padded_month() {
        let key: MonthKey = "2024-11".parse().unwrap();

        assert_eq!(key, MonthKey::from_date(date(2024, 11, 1)));
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let key: MonthKey = "  2024-01 ".parse().unwrap();

        assert_eq!(key.to_string(), "2024-01");
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        for bad in ["2024-1", "2024-13", "2024-00", "24-01", "2024/01", "All", ""] {
            let result = bad.parse::<MonthKey>();
            assert_eq!(result, Err(ParseMonthKeyError(bad.to_string())), "input {bad:?}");
        }
    }

    #[test]
    fn years_beyond_four_digits_round_trip() {
        for year in [10000, 262_143, -1, -2024, 0] {
            let key = MonthKey::from_date(date(year, 6, 1));

            let parsed: MonthKey = key.to_string().parse().unwrap();

            assert_eq!(parsed, key, "year {year} rendered as {key}");
        }
        assert_eq!(MonthKey::from_date(date(10000, 1, 1)).to_string(), "10000-01");
        assert_eq!(MonthKey::from_date(date(-1, 12, 1)).to_string(), "-0001-12");
    }

    #[test]
    fn oversized_year_is_rejected_not_wrapped() {
        let input = "99999999999-01";

        assert_eq!(input.parse::<MonthKey>(), Err(ParseMonthKeyError(input.to_string())));
    }

    #[test]
    fn ordering_is_chronological() {
        let mut keys: Vec<MonthKey> = ["2025-01", "2024-12", "2024-02"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        keys.sort();

        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["2024-02", "2024-12", "2025-01"]);
    }

    #[test]
    fn contains_matches_only_same_month() {
        let key: MonthKey = "2025-02".parse().unwrap();

        assert!(key.contains(date(2025, 2, 28)));
        assert!(!key.contains(date(2025, 3, 1)));
        assert!(!key.contains(date(2024, 2, 1)));
    }
}
