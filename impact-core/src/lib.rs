pub mod calculations;
pub mod error;
pub mod filter;
pub mod ledger;
pub mod models;
pub mod quotes;
pub mod session;

pub use error::ValidationError;
pub use filter::{CategoryFilter, MonthFilter, filter_records};
pub use ledger::Ledger;
pub use models::*;
pub use quotes::{Quote, pick_quote, random_quote};
pub use session::{Session, ValidationPolicy};
