use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub id: i64,
    pub seller_id: i64,
    pub amount: Decimal,
    pub payment_type: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub transaction_date: Option<NaiveDateTime>,
}
