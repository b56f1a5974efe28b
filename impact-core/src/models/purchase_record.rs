use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MonthKey;

/// Stored in place of a missing or blank product name.
pub const PRODUCT_NAME_PLACEHOLDER: &str = "—";

/// A logged purchase. Field order matches the CSV export columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub date: NaiveDate,

    #[serde(rename = "product_type")]
    pub category: String,

    pub product_name: String,

    pub brand: Option<String>,

    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,

    // Derived at insertion time from the multiplier then in effect
    #[serde(with = "rust_decimal::serde::str")]
    pub impact: Decimal,

    pub eco_brand: bool,
}

impl PurchaseRecord {
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// For submitting new purchases (no derived impact)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseInput {
    pub date: NaiveDate,
    pub category: String,
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub price: Decimal,
    pub eco_brand: bool,
}

impl PurchaseInput {
    /// Minimal input with the optional fields left empty.
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            product_name: None,
            brand: None,
            price,
            eco_brand: false,
        }
    }

    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_eco_brand(mut self, eco_brand: bool) -> Self {
        self.eco_brand = eco_brand;
        self
    }
}
