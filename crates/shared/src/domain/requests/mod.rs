mod analytics;
mod seller;
mod transaction;

pub use self::analytics::{BestPeriodQuery, PeriodType, SellersBelowQuery, TopSellerQuery};
pub use self::seller::{CreateSellerRequest, FindAllSellers, UpdateSellerRequest};
pub use self::transaction::{
    CreateTransactionRequest, FindAllTransactions, PaymentType, TransactionStatus,
};
