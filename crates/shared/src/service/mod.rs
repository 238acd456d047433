mod analytics;
mod seller;
mod transaction;

pub use self::analytics::AnalyticsService;
pub use self::seller::{SellerCommandService, SellerQueryService};
pub use self::transaction::{TransactionCommandService, TransactionQueryService};
