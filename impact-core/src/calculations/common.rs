//! Common utility functions for impact calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use impact_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(35.404)), dec!(35.40));
/// assert_eq!(round_half_up(dec!(35.405)), dec!(35.41));
/// assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount with exactly two decimals, rounding half-up first.
///
/// `{:.2}` on a `Decimal` truncates extra places; this does not.
///
/// ```
/// use rust_decimal_macros::dec;
/// use impact_core::calculations::common::format_amount;
///
/// assert_eq!(format_amount(dec!(19.999)), "20.00");
/// assert_eq!(format_amount(dec!(0.125)), "0.13");
/// assert_eq!(format_amount(dec!(5)), "5.00");
/// ```
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Divides `total` by `count`, rounded to cents, or zero when `count` is zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use impact_core::calculations::common::average_or_zero;
///
/// assert_eq!(average_or_zero(dec!(10.00), 3), dec!(3.33));
/// assert_eq!(average_or_zero(dec!(10.00), 0), Decimal::ZERO);
/// ```
pub fn average_or_zero(
    total: Decimal,
    count: usize,
) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    round_half_up(total / Decimal::from(count))
}
