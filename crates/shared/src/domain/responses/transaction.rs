use crate::model::transaction::TransactionModel;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    pub id: i64,
    pub seller_id: i64,
    #[schema(value_type = String, example = "150.00")]
    pub amount: Decimal,
    pub payment_type: String,
    pub status: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: NaiveDateTime,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub transaction_date: Option<NaiveDateTime>,
}

impl From<TransactionModel> for TransactionResponse {
    fn from(value: TransactionModel) -> Self {
        TransactionResponse {
            id: value.id,
            seller_id: value.seller_id,
            amount: value.amount,
            payment_type: value.payment_type,
            status: value.status,
            created_at: value.created_at,
            transaction_date: value.transaction_date,
        }
    }
}
