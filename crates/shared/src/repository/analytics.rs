use crate::{
    abstract_trait::analytics::AnalyticsRepositoryTrait,
    config::ConnectionPool,
    domain::requests::PeriodType,
    errors::RepositoryError,
    model::analytics::{SellerBestPeriodModel, SellerSalesModel},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::{error, info};

#[derive(Clone)]
pub struct AnalyticsRepository {
    db: ConnectionPool,
}

impl AnalyticsRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl AnalyticsRepositoryTrait for AnalyticsRepository {
    async fn find_top_sellers(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<SellerSalesModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                s.id          AS seller_id,
                s.name        AS seller_name,
                SUM(t.amount) AS total_amount
            FROM transactions t
            JOIN sellers s ON s.id = t.seller_id
            WHERE t.status = 'COMPLETED'
              AND s.deleted = FALSE
              AND t.transaction_date >= $1
              AND t.transaction_date < $2
            GROUP BY s.id, s.name
            ORDER BY total_amount DESC, s.id ASC
        "#;

        let rows = sqlx::query_as::<_, SellerSalesModel>(sql)
            .bind(from)
            .bind(to)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_top_sellers: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        info!("📊 {} sellers with sales in [{from}, {to})", rows.len());

        Ok(rows)
    }

    async fn find_sellers_below(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        max_total: Decimal,
    ) -> Result<Vec<SellerSalesModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                s.id          AS seller_id,
                s.name        AS seller_name,
                SUM(t.amount) AS total_amount
            FROM transactions t
            JOIN sellers s ON s.id = t.seller_id
            WHERE t.status = 'COMPLETED'
              AND s.deleted = FALSE
              AND t.transaction_date >= $1
              AND t.transaction_date < $2
            GROUP BY s.id, s.name
            HAVING SUM(t.amount) < $3
            ORDER BY total_amount ASC, s.id ASC
        "#;

        sqlx::query_as::<_, SellerSalesModel>(sql)
            .bind(from)
            .bind(to)
            .bind(max_total)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_sellers_below: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn find_best_period(
        &self,
        seller_id: i64,
        kind: PeriodType,
    ) -> Result<Option<SellerBestPeriodModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = r#"
            SELECT
                date_trunc($2::TEXT, t.transaction_date) AS period_start,
                COUNT(*)                                 AS transaction_count,
                SUM(t.amount)                            AS total_amount
            FROM transactions t
            WHERE t.seller_id = $1
              AND t.status = 'COMPLETED'
              AND t.transaction_date IS NOT NULL
            GROUP BY 1
            ORDER BY total_amount DESC, period_start ASC
            LIMIT 1
        "#;

        sqlx::query_as::<_, SellerBestPeriodModel>(sql)
            .bind(seller_id)
            .bind(kind.truncation_unit())
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_best_period for seller {seller_id}: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }
}
