use crate::{
    domain::requests::FindAllSellers, errors::RepositoryError, model::seller::SellerModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSellerQueryRepository = Arc<dyn SellerQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SellerQueryRepositoryTrait {
    /// Page of non-deleted sellers plus the total number of matches.
    async fn find_all(
        &self,
        req: &FindAllSellers,
    ) -> Result<(Vec<SellerModel>, i64), RepositoryError>;
    /// `None` when the seller is missing or soft-deleted.
    async fn find_by_id(&self, id: i64) -> Result<Option<SellerModel>, RepositoryError>;
}
