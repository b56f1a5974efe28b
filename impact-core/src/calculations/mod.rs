//! Purchase impact calculations.
//!
//! This module holds the pure computations behind the dashboard: per-purchase
//! impact, monthly and per-category aggregation, badge classification and the
//! feedback shown after a purchase is logged.

pub mod aggregate;
pub mod badge;
pub mod common;
pub mod feedback;
pub mod impact;

pub use aggregate::{
    dashboard_totals, latest_month, summarize_by_category, summarize_by_month, top_categories,
};
pub use badge::classify;
pub use feedback::PurchaseFeedback;
pub use impact::{checked_impact, compute_impact};
