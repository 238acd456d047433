pub mod analytics;
pub mod seller;
pub mod transaction;
