mod badge_tier;
mod category;
mod month_key;
mod purchase_record;
mod summary;

pub use badge_tier::BadgeTier;
pub use category::{CategoryMultiplierTable, OTHER_CATEGORY, suggestions};
pub use month_key::{MonthKey, ParseMonthKeyError};
pub use purchase_record::{PRODUCT_NAME_PLACEHOLDER, PurchaseInput, PurchaseRecord};
pub use summary::{CategorySummary, DashboardTotals, MonthlySummary};
