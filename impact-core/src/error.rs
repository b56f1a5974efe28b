use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a submission or configuration change is rejected.
///
/// A rejected submission is never appended to the ledger and leaves every
/// stored record untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The product category was empty or whitespace.
    #[error("product category is required")]
    MissingCategory,

    /// The brand was empty while the active policy requires one.
    #[error("brand is required; type the brand name to add the purchase")]
    MissingBrand,

    #[error("price must not be negative (got {0})")]
    NegativePrice(Decimal),

    /// `price × multiplier` does not fit in a `Decimal`.
    #[error("price {price} is too large to score with multiplier {multiplier}")]
    PriceOutOfRange { price: Decimal, multiplier: Decimal },

    #[error("multiplier for '{category}' must not be negative (got {value})")]
    NegativeMultiplier { category: String, value: Decimal },
}
