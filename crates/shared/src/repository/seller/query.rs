use crate::{
    abstract_trait::seller::repository::SellerQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllSellers, errors::RepositoryError, model::seller::SellerModel,
};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;
use tracing::{error, info};

#[derive(Clone)]
pub struct SellerQueryRepository {
    db: ConnectionPool,
}

impl SellerQueryRepository {
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
impl SellerQueryRepositoryTrait for SellerQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllSellers,
    ) -> Result<(Vec<SellerModel>, i64), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let limit = req.page_size.clamp(1, 100);
        let offset = (req.page - 1).max(0) * limit;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.trim())
        };

        let sql = r#"
            SELECT
                id,
                name,
                contact_info,
                registration_date,
                deleted,
                COUNT(*) OVER() AS total_count
            FROM sellers
            WHERE deleted = FALSE
              AND ($1::TEXT IS NULL
                   OR name ILIKE '%' || $1 || '%'
                   OR contact_info ILIKE '%' || $1 || '%')
            ORDER BY registration_date DESC, id DESC
            LIMIT $2 OFFSET $3;
        "#;

        let rows = sqlx::query(sql)
            .bind(search_pattern)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in find_all sellers: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        let total = rows
            .first()
            .and_then(|r| r.try_get::<i64, _>("total_count").ok())
            .unwrap_or(0);

        let data = rows
            .into_iter()
            .map(|row| {
                Ok(SellerModel {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    contact_info: row.try_get("contact_info")?,
                    registration_date: row.try_get("registration_date")?,
                    deleted: row.try_get("deleted")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| {
                error!("❌ Failed to map seller rows: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        info!("📋 Loaded {} of {} sellers", data.len(), total);

        Ok((data, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SellerModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let seller = sqlx::query_as::<_, SellerModel>(
            r#"
            SELECT id, name, contact_info, registration_date, deleted
            FROM sellers
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_by_id seller {id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(seller)
    }
}
