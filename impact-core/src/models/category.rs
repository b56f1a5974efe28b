use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category whose multiplier is used for names missing from the table.
pub const OTHER_CATEGORY: &str = "Other";

/// Multiplier applied when even [`OTHER_CATEGORY`] has no entry.
const FALLBACK_MULTIPLIER: Decimal = dec!(0.10);

const SEEDED: [(&str, Decimal); 13] = [
    ("Clothing (Fast Fashion)", dec!(0.12)),
    ("Clothing (Sustainable/Second-Hand)", dec!(0.03)),
    ("Footwear (Leather)", dec!(0.20)),
    ("Footwear (Synthetic)", dec!(0.14)),
    ("Electronics", dec!(0.35)),
    ("Groceries (Packaged)", dec!(0.08)),
    ("Groceries (Fresh/Local)", dec!(0.02)),
    ("Personal Care", dec!(0.06)),
    ("Furniture", dec!(0.25)),
    ("Beverages (Single-Use Bottle)", dec!(0.09)),
    ("Books & Stationery", dec!(0.02)),
    ("Home Appliances", dec!(0.30)),
    (OTHER_CATEGORY, dec!(0.10)),
];

/// Session-scoped mapping from category name to impact multiplier.
///
/// Entries keep their insertion order (the seeded order first), which is the
/// order categories are listed to the user. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMultiplierTable {
    entries: Vec<(String, Decimal)>,
}

impl CategoryMultiplierTable {
    /// The 13 built-in categories with their default multipliers.
    pub fn seeded() -> Self {
        Self {
            entries: SEEDED
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect(),
        }
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, value)| *value)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    /// Multiplier for `category`, falling back to the "Other" multiplier
    /// for names the table does not know.
    pub fn multiplier_for(&self, category: &str) -> Decimal {
        self.get(category)
            .or_else(|| self.get(OTHER_CATEGORY))
            .unwrap_or(FALLBACK_MULTIPLIER)
    }

    /// Sets the multiplier for `category`, adding the category if it is new.
    ///
    /// Returns the previous multiplier, if any. Records already in a ledger
    /// keep the impact computed with the old value.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::MissingCategory`] if the name is blank.
    /// * [`ValidationError::NegativeMultiplier`] if `value` is below zero.
    pub fn set(
        &mut self,
        category: &str,
        value: Decimal,
    ) -> Result<Option<Decimal>, ValidationError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeMultiplier {
                category: category.to_string(),
                value,
            });
        }

        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, existing)) => Ok(Some(std::mem::replace(existing, value))),
            None => {
                self.entries.push((category.to_string(), value));
                Ok(None)
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryMultiplierTable {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Lower-impact tips for a category.
pub fn suggestions(category: &str) -> &'static [&'static str] {
    match category {
        "Clothing (Fast Fashion)" => &[
            "Buy second-hand",
            "Choose organic cotton",
            "Rent for events",
        ],
        "Clothing (Sustainable/Second-Hand)" => &["Great choice! Try mending & care tips"],
        "Footwear (Leather)" => &["Look for vegetable-tanned leather or recycled materials"],
        "Footwear (Synthetic)" => &["Try locally made or recycled material brands"],
        "Electronics" => &["Buy refurbished, repairable models"],
        "Groceries (Packaged)" => &["Choose loose produce, bring reusable bags"],
        "Groceries (Fresh/Local)" => &["Support local farmers markets"],
        "Personal Care" => &["Refillable or solid bars (shampoo bars)"],
        "Furniture" => &["Consider preloved or sustainably sourced wood"],
        "Beverages (Single-Use Bottle)" => &["Use reusable bottle or buy bulk"],
        "Books & Stationery" => &["Buy digital or second-hand books"],
        "Home Appliances" => &["Choose energy star rated"],
        OTHER_CATEGORY => &["Search for lower-impact alternatives"],
        _ => &["Consider lower-impact choices"],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn seeded_table_has_thirteen_categories_in_order() {
        let table = CategoryMultiplierTable::seeded();

        assert_eq!(table.len(), 13);
        assert_eq!(table.categories().next(), Some("Clothing (Fast Fashion)"));
        assert_eq!(table.categories().last(), Some(OTHER_CATEGORY));
    }

    #[test]
    fn seeded_multipliers_match_defaults() {
        let table = CategoryMultiplierTable::seeded();

        assert_eq!(table.get("Electronics"), Some(dec!(0.35)));
        assert_eq!(table.get("Groceries (Fresh/Local)"), Some(dec!(0.02)));
        assert_eq!(table.get("Home Appliances"), Some(dec!(0.30)));
        assert_eq!(table.get(OTHER_CATEGORY), Some(dec!(0.10)));
    }

    #[test]
    fn unknown_category_falls_back_to_other() {
        let mut table = CategoryMultiplierTable::seeded();

        assert_eq!(table.multiplier_for("Garden Tools"), dec!(0.10));

        table.set(OTHER_CATEGORY, dec!(0.15)).unwrap();
        assert_eq!(table.multiplier_for("Garden Tools"), dec!(0.15));
    }

    #[test]
    fn set_replaces_existing_and_returns_previous() {
        let mut table = CategoryMultiplierTable::seeded();

        let previous = table.set("Electronics", dec!(0.40)).unwrap();

        assert_eq!(previous, Some(dec!(0.35)));
        assert_eq!(table.get("Electronics"), Some(dec!(0.40)));
        assert_eq!(table.len(), 13);
    }

    #[test]
    fn set_adds_new_category_at_the_end() {
        let mut table = CategoryMultiplierTable::seeded();

        let previous = table.set("Toys", dec!(0.11)).unwrap();

        assert_eq!(previous, None);
        assert_eq!(table.len(), 14);
        assert_eq!(table.categories().last(), Some("Toys"));
    }

    #[test]
    fn set_accepts_zero() {
        let mut table = CategoryMultiplierTable::seeded();

        table.set("Furniture", dec!(0)).unwrap();

        assert_eq!(table.get("Furniture"), Some(dec!(0)));
    }

    #[test]
    fn set_rejects_negative_multiplier() {
        let mut table = CategoryMultiplierTable::seeded();

        let err = table.set("Furniture", dec!(-0.01)).unwrap_err();

        assert_eq!(
            err,
            ValidationError::NegativeMultiplier {
                category: "Furniture".to_string(),
                value: dec!(-0.01),
            }
        );
        assert_eq!(table.get("Furniture"), Some(dec!(0.25)));
    }

    #[test]
    fn set_rejects_blank_name() {
        let mut table = CategoryMultiplierTable::seeded();

        assert_eq!(table.set("  ", dec!(0.1)), Err(ValidationError::MissingCategory));
    }

    #[test]
    fn suggestions_default_for_unknown_category() {
        assert_eq!(suggestions("Electronics"), &["Buy refurbished, repairable models"]);
        assert_eq!(suggestions("Clothing (Fast Fashion)").len(), 3);
        assert_eq!(suggestions("Garden Tools"), &["Consider lower-impact choices"]);
    }
}
