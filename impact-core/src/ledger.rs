//! Append-only, in-memory purchase ledger for one session.

use std::collections::BTreeSet;

use crate::models::{MonthKey, PurchaseRecord};

/// Purchases logged during a session, in insertion order.
///
/// Records are only ever appended; there is no update, removal, sorting or
/// deduplication. Insertion order is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<PurchaseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns a reference to the stored copy.
    pub fn append(&mut self, record: PurchaseRecord) -> &PurchaseRecord {
        self.records.push(record);
        // Non-empty after the push, so the last index is in bounds.
        &self.records[self.records.len() - 1]
    }

    /// Every record, oldest first.
    pub fn all(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct months that have purchases, newest first.
    pub fn months(&self) -> Vec<MonthKey> {
        let months: BTreeSet<MonthKey> = self.records.iter().map(PurchaseRecord::month).collect();
        months.into_iter().rev().collect()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a PurchaseRecord;
    type IntoIter = std::slice::Iter<'a, PurchaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn record(
        date: &str,
        name: &str,
    ) -> PurchaseRecord {
        PurchaseRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category: "Other".to_string(),
            product_name: name.to_string(),
            brand: Some("Acme".to_string()),
            price: dec!(10),
            impact: dec!(1.00),
            eco_brand: false,
        }
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = Ledger::new();

        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.months().is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.append(record("2025-03-01", "third-by-date"));
        ledger.append(record("2025-01-01", "first-by-date"));
        ledger.append(record("2025-02-01", "second-by-date"));

        let names: Vec<&str> = ledger.all().iter().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, vec!["third-by-date", "first-by-date", "second-by-date"]);
    }

    #[test]
    fn append_keeps_duplicates() {
        let mut ledger = Ledger::new();
        ledger.append(record("2025-01-01", "same"));
        ledger.append(record("2025-01-01", "same"));

        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn append_returns_stored_record() {
        let mut ledger = Ledger::new();

        let stored = ledger.append(record("2025-01-01", "kettle"));

        assert_eq!(stored.product_name, "kettle");
    }

    #[test]
    fn append_returns_the_newest_record_not_the_first() {
        let mut ledger = Ledger::new();
        ledger.append(record("2025-01-01", "mug"));
        ledger.append(record("2025-01-02", "lamp"));

        let stored = ledger.append(record("2025-01-03", "rug")).clone();

        assert_eq!(stored.product_name, "rug");
        assert_eq!(ledger.all().last(), Some(&stored));
    }

    #[test]
    fn months_are_distinct_and_newest_first() {
        let mut ledger = Ledger::new();
        ledger.append(record("2025-01-10", "a"));
        ledger.append(record("2025-03-01", "b"));
        ledger.append(record("2025-01-20", "c"));
        ledger.append(record("2024-12-31", "d"));

        let months: Vec<String> = ledger.months().iter().map(ToString::to_string).collect();
        assert_eq!(months, vec!["2025-03", "2025-01", "2024-12"]);
    }
}
