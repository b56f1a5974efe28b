//! A user session: the multiplier table, the ledger and the validation rules.
//!
//! Everything a session owns lives in memory and is dropped with it. The
//! session is passed explicitly to whatever front end drives it; there is no
//! process-wide state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculations::checked_impact;
use crate::error::ValidationError;
use crate::ledger::Ledger;
use crate::models::{
    CategoryMultiplierTable, PRODUCT_NAME_PLACEHOLDER, PurchaseInput, PurchaseRecord,
};

/// Validation rules applied to new purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Reject purchases whose brand is empty or whitespace.
    pub require_brand: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_brand: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    multipliers: CategoryMultiplierTable,
    ledger: Ledger,
    policy: ValidationPolicy,
}

impl Session {
    /// Creates a session with an empty ledger.
    pub fn new(
        multipliers: CategoryMultiplierTable,
        policy: ValidationPolicy,
    ) -> Self {
        Self {
            multipliers,
            ledger: Ledger::new(),
            policy,
        }
    }

    /// Seeded multipliers, brand required.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn multipliers(&self) -> &CategoryMultiplierTable {
        &self.multipliers
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ValidationPolicy) {
        self.policy = policy;
    }

    /// Changes a category multiplier for purchases added from now on.
    ///
    /// Records already in the ledger keep their stored impact.
    pub fn set_multiplier(
        &mut self,
        category: &str,
        value: Decimal,
    ) -> Result<Option<Decimal>, ValidationError> {
        let previous = self.multipliers.set(category, value)?;
        info!(category, %value, previous = ?previous, "multiplier updated");
        Ok(previous)
    }

    /// Validates a submission, computes its impact and appends it.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::MissingCategory`] - blank category.
    /// * [`ValidationError::MissingBrand`] - blank brand while the policy
    ///   requires one.
    /// * [`ValidationError::NegativePrice`] - price below zero.
    /// * [`ValidationError::PriceOutOfRange`] - `price × multiplier` does not
    ///   fit in a `Decimal`.
    ///
    /// On error the ledger is left unchanged.
    pub fn add_purchase(
        &mut self,
        input: PurchaseInput,
    ) -> Result<&PurchaseRecord, ValidationError> {
        let record = self.build_record(input)?;
        info!(
            category = %record.category,
            price = %record.price,
            impact = %record.impact,
            "purchase added"
        );
        Ok(self.ledger.append(record))
    }

    fn build_record(
        &self,
        input: PurchaseInput,
    ) -> Result<PurchaseRecord, ValidationError> {
        let category = input.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }

        let brand = input
            .brand
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string);
        if brand.is_none() && self.policy.require_brand {
            return Err(ValidationError::MissingBrand);
        }

        if input.price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(input.price));
        }

        if !self.multipliers.contains(category) {
            warn!(category, "unknown category, using the Other multiplier");
        }
        let multiplier = self.multipliers.multiplier_for(category);
        let impact = checked_impact(input.price, multiplier).ok_or(
            ValidationError::PriceOutOfRange {
                price: input.price,
                multiplier,
            },
        )?;

        let product_name = input
            .product_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(PRODUCT_NAME_PLACEHOLDER)
            .to_string();

        Ok(PurchaseRecord {
            date: input.date,
            category: category.to_string(),
            product_name,
            brand,
            price: input.price,
            impact,
            eco_brand: input.eco_brand,
        })
    }
}
