mod analytics;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
mod seller;
mod transaction;

pub use self::analytics::AnalyticsRepository;
pub use self::seller::{SellerCommandRepository, SellerQueryRepository};
pub use self::transaction::{TransactionCommandRepository, TransactionQueryRepository};
