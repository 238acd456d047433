use crate::{
    domain::{
        requests::PeriodType,
        responses::{ApiResponse, BestPeriodResponse, SellerStatsResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynAnalyticsService = Arc<dyn AnalyticsServiceTrait + Send + Sync>;

#[async_trait]
pub trait AnalyticsServiceTrait {
    async fn get_top_seller(
        &self,
        kind: PeriodType,
        reference_date: NaiveDate,
    ) -> Result<ApiResponse<SellerStatsResponse>, ServiceError>;
    async fn get_sellers_below_total(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        max_total: Decimal,
    ) -> Result<ApiResponse<Vec<SellerStatsResponse>>, ServiceError>;
    async fn get_best_period_for_seller(
        &self,
        seller_id: i64,
        kind: PeriodType,
    ) -> Result<ApiResponse<BestPeriodResponse>, ServiceError>;
}
