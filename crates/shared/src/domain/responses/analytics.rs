use crate::{domain::requests::PeriodType, model::analytics::SellerSalesModel};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SellerStatsResponse {
    pub seller_id: i64,
    pub seller_name: String,
    #[schema(value_type = String, example = "300.00")]
    pub total_amount: Decimal,
}

impl From<SellerSalesModel> for SellerStatsResponse {
    fn from(value: SellerSalesModel) -> Self {
        SellerStatsResponse {
            seller_id: value.seller_id,
            seller_name: value.seller_name,
            total_amount: value.total_amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BestPeriodResponse {
    pub seller_id: i64,
    pub period_type: PeriodType,
    #[schema(value_type = String, format = DateTime)]
    pub period_start: NaiveDateTime,
    #[schema(value_type = String, format = DateTime)]
    pub period_end: NaiveDateTime,
    pub transaction_count: i64,
    #[schema(value_type = String, example = "300.00")]
    pub total_amount: Decimal,
}
