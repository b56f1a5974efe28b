use rust_decimal::Decimal;

use crate::models::BadgeTier;

/// Maps a period's total impact to its badge tier.
///
/// Each tier's upper bound is inclusive, so exactly 50 is still
/// [`BadgeTier::EcoSaver`] while 50.01 is [`BadgeTier::GreenShopper`].
pub fn classify(total_impact: Decimal) -> BadgeTier {
    BadgeTier::ALL
        .into_iter()
        .find(|tier| match tier.upper_bound() {
            Some(bound) => total_impact <= bound,
            None => true,
        })
        .unwrap_or(BadgeTier::EcoAdvocate)
}
