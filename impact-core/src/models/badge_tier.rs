use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Ordinal classification of a period's total impact.
///
/// | Tier | Total impact     | Label             |
/// |------|------------------|-------------------|
/// | 1    | ≤ 50             | Eco Saver         |
/// | 2    | > 50 and ≤ 150   | Green Shopper     |
/// | 3    | > 150 and ≤ 300  | Conscious Shopper |
/// | 4    | > 300            | Eco Advocate      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BadgeTier {
    EcoSaver,
    GreenShopper,
    ConsciousShopper,
    EcoAdvocate,
}

impl BadgeTier {
    /// All tiers, lowest impact first.
    pub const ALL: [BadgeTier; 4] = [
        Self::EcoSaver,
        Self::GreenShopper,
        Self::ConsciousShopper,
        Self::EcoAdvocate,
    ];

    /// 1-based position of the tier.
    pub fn rank(&self) -> u8 {
        match self {
            Self::EcoSaver => 1,
            Self::GreenShopper => 2,
            Self::ConsciousShopper => 3,
            Self::EcoAdvocate => 4,
        }
    }

    /// Inclusive upper bound of the tier, `None` for the open-ended top tier.
    pub fn upper_bound(&self) -> Option<Decimal> {
        match self {
            Self::EcoSaver => Some(dec!(50)),
            Self::GreenShopper => Some(dec!(150)),
            Self::ConsciousShopper => Some(dec!(300)),
            Self::EcoAdvocate => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EcoSaver => "Eco Saver",
            Self::GreenShopper => "Green Shopper",
            Self::ConsciousShopper => "Conscious Shopper",
            Self::EcoAdvocate => "Eco Advocate",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::EcoSaver => "Tiny footprint! Exceptional",
            Self::GreenShopper => "Very good! Keep going",
            Self::ConsciousShopper => "Nice effort! You're making progress",
            Self::EcoAdvocate => "You're conscious, aim for smaller steps too",
        }
    }
}
