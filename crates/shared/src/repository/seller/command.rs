use crate::{
    abstract_trait::seller::repository::SellerCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateSellerRequest, UpdateSellerRequest},
    errors::RepositoryError,
    model::seller::SellerModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct SellerCommandRepository {
    db: ConnectionPool,
}

impl SellerCommandRepository {
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
impl SellerCommandRepositoryTrait for SellerCommandRepository {
    async fn create(&self, req: &CreateSellerRequest) -> Result<SellerModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, SellerModel>(
            r#"
            INSERT INTO sellers (name, contact_info)
            VALUES ($1, $2)
            RETURNING id, name, contact_info, registration_date, deleted
            "#,
        )
        .bind(&req.name)
        .bind(&req.contact_info)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during seller creation: {e:?}");
            RepositoryError::from_constraint(e)
        })?;

        info!("🆕 Inserted seller {}", record.id);

        Ok(record)
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateSellerRequest,
    ) -> Result<Option<SellerModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, SellerModel>(
            r#"
            UPDATE sellers
            SET
                name = COALESCE($2, name),
                contact_info = COALESCE($3, contact_info)
            WHERE id = $1 AND deleted = FALSE
            RETURNING id, name, contact_info, registration_date, deleted
            "#,
        )
        .bind(id)
        .bind(req.name.as_deref())
        .bind(req.contact_info.as_deref())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error while updating seller {id}: {e:?}");
            RepositoryError::from_constraint(e)
        })?;

        Ok(record)
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = "UPDATE sellers SET deleted = TRUE WHERE id = $1 AND deleted = FALSE";

        let result = sqlx::query(sql)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error while deleting seller {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
