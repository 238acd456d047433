mod analytics;
mod api;
mod pagination;
mod seller;
mod transaction;

pub use self::analytics::{BestPeriodResponse, SellerStatsResponse};
pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::pagination::Pagination;
pub use self::seller::SellerResponse;
pub use self::transaction::TransactionResponse;
