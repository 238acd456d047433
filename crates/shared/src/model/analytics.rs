use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SellerSalesModel {
    pub seller_id: i64,
    pub seller_name: String,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SellerBestPeriodModel {
    pub period_start: NaiveDateTime,
    pub transaction_count: i64,
    pub total_amount: Decimal,
}
