use crate::{
    abstract_trait::transaction::repository::TransactionCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateTransactionRequest, TransactionStatus},
    errors::RepositoryError,
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::{error, info};

pub struct TransactionCommandRepository {
    db: ConnectionPool,
}

impl TransactionCommandRepository {
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
impl TransactionCommandRepositoryTrait for TransactionCommandRepository {
    async fn create_pending(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, TransactionModel>(
            r#"
            INSERT INTO transactions (seller_id, amount, payment_type, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, seller_id, amount, payment_type, status, created_at, transaction_date
            "#,
        )
        .bind(req.seller_id)
        .bind(req.amount)
        .bind(req.payment_type.as_str())
        .bind(TransactionStatus::Pending.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during transaction creation: {e:?}");
            RepositoryError::from_constraint(e)
        })?;

        info!("🆕 Inserted pending transaction {}", record.id);

        Ok(record)
    }

    async fn transition_status(
        &self,
        id: i64,
        from: TransactionStatus,
        to: TransactionStatus,
        transaction_date: Option<NaiveDateTime>,
    ) -> Result<Option<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, TransactionModel>(
            r#"
            UPDATE transactions
            SET
                status = $3,
                transaction_date = COALESCE($4, transaction_date)
            WHERE id = $1 AND status = $2
            RETURNING id, seller_id, amount, payment_type, status, created_at, transaction_date
            "#,
        )
        .bind(id)
        .bind(from.as_str())
        .bind(to.as_str())
        .bind(transaction_date)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error moving transaction {id} from {from} to {to}: {e:?}");
            RepositoryError::Sqlx(e)
        })
    }
}
