use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Estimated impact of a purchase: `price × multiplier`, rounded to cents.
///
/// Both inputs are expected to be non-negative; `Session::add_purchase`
/// rejects negative prices and the multiplier table rejects negative
/// multipliers before they reach this function.
///
/// ```
/// use rust_decimal_macros::dec;
/// use impact_core::calculations::compute_impact;
///
/// assert_eq!(compute_impact(dec!(100.00), dec!(0.35)), dec!(35.00));
/// ```
///
/// A product too large for `Decimal` saturates at `Decimal::MAX`; use
/// [`checked_impact`] to detect that case.
pub fn compute_impact(
    price: Decimal,
    multiplier: Decimal,
) -> Decimal {
    checked_impact(price, multiplier).unwrap_or(Decimal::MAX)
}

/// Like [`compute_impact`], but `None` when `price × multiplier` overflows.
pub fn checked_impact(
    price: Decimal,
    multiplier: Decimal,
) -> Option<Decimal> {
    price.checked_mul(multiplier).map(round_half_up)
}
