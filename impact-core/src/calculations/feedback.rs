use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::PurchaseRecord;

/// Multipliers at or below this count as low-impact categories.
const LOW_IMPACT_MULTIPLIER: Decimal = dec!(0.03);

/// Impact below this is a small footprint.
const SMALL_FOOTPRINT: Decimal = dec!(10);

/// Feedback shown right after a purchase is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseFeedback {
    /// Eco brand, or a low-impact category.
    EcoChoice,
    SmallFootprint,
    ConsiderGreener,
}

impl PurchaseFeedback {
    /// Picks the feedback for a freshly added record and the multiplier it
    /// was computed with.
    pub fn for_purchase(
        record: &PurchaseRecord,
        multiplier: Decimal,
    ) -> Self {
        if record.eco_brand || multiplier <= LOW_IMPACT_MULTIPLIER {
            Self::EcoChoice
        } else if record.impact < SMALL_FOOTPRINT {
            Self::SmallFootprint
        } else {
            Self::ConsiderGreener
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::EcoChoice => "Eco badge: great choice!",
            Self::SmallFootprint => "Small footprint, nice!",
            Self::ConsiderGreener => "Consider greener options",
        }
    }
}
