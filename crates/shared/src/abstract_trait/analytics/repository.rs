use crate::{
    domain::requests::PeriodType,
    errors::RepositoryError,
    model::analytics::{SellerBestPeriodModel, SellerSalesModel},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynAnalyticsRepository = Arc<dyn AnalyticsRepositoryTrait + Send + Sync>;

/// Sales aggregates over COMPLETED transactions of live sellers.
///
/// Windows are half-open: `from <= transaction_date < to`.
#[async_trait]
pub trait AnalyticsRepositoryTrait {
    /// Totals per seller, highest first, ties broken by lowest seller id.
    async fn find_top_sellers(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<SellerSalesModel>, RepositoryError>;

    /// Sellers whose total is strictly below `max_total`, lowest first.
    async fn find_sellers_below(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        max_total: Decimal,
    ) -> Result<Vec<SellerSalesModel>, RepositoryError>;

    /// Bucket with the highest total for one seller; earliest bucket wins ties.
    async fn find_best_period(
        &self,
        seller_id: i64,
        kind: PeriodType,
    ) -> Result<Option<SellerBestPeriodModel>, RepositoryError>;
}
