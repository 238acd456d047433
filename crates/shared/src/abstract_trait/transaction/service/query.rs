use crate::{
    domain::{
        requests::FindAllTransactions,
        responses::{ApiResponse, ApiResponsePagination, TransactionResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryService = Arc<dyn TransactionQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllTransactions,
    ) -> Result<ApiResponsePagination<Vec<TransactionResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64)
    -> Result<ApiResponse<TransactionResponse>, ServiceError>;
}
