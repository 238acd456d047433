use crate::{
    abstract_trait::transaction::repository::TransactionQueryRepositoryTrait,
    config::ConnectionPool, domain::requests::FindAllTransactions, errors::RepositoryError,
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;
use tracing::error;

#[derive(Clone)]
pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
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
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllTransactions,
    ) -> Result<(Vec<TransactionModel>, i64), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let limit = req.page_size.clamp(1, 100);
        let offset = (req.page - 1).max(0) * limit;

        let sql = r#"
            SELECT
                id,
                seller_id,
                amount,
                payment_type,
                status,
                created_at,
                transaction_date,
                COUNT(*) OVER() AS total_count
            FROM transactions
            WHERE ($1::BIGINT IS NULL OR seller_id = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3;
        "#;

        let rows = sqlx::query(sql)
            .bind(req.seller_id)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_all transactions: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        let total = rows
            .first()
            .and_then(|r| r.try_get::<i64, _>("total_count").ok())
            .unwrap_or(0);

        let data = rows
            .into_iter()
            .map(|row| {
                Ok(TransactionModel {
                    id: row.try_get("id")?,
                    seller_id: row.try_get("seller_id")?,
                    amount: row.try_get("amount")?,
                    payment_type: row.try_get("payment_type")?,
                    status: row.try_get("status")?,
                    created_at: row.try_get("created_at")?,
                    transaction_date: row.try_get("transaction_date")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| {
                error!("❌ Failed to map transaction rows: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok((data, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, TransactionModel>(
            r#"
            SELECT id, seller_id, amount, payment_type, status, created_at, transaction_date
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_by_id transaction {id}: {e:?}");
            RepositoryError::Sqlx(e)
        })
    }
}
