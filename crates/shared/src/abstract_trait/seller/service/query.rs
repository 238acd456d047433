use crate::{
    domain::{
        requests::FindAllSellers,
        responses::{ApiResponse, ApiResponsePagination, SellerResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSellerQueryService = Arc<dyn SellerQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait SellerQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllSellers,
    ) -> Result<ApiResponsePagination<Vec<SellerResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<SellerResponse>, ServiceError>;
}
