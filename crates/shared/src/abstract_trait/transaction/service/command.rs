use crate::{
    domain::{
        requests::CreateTransactionRequest,
        responses::{ApiResponse, TransactionResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionCommandService = Arc<dyn TransactionCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionCommandServiceTrait {
    async fn create_pending(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError>;
    async fn complete(&self, id: i64) -> Result<ApiResponse<TransactionResponse>, ServiceError>;
    async fn cancel(&self, id: i64) -> Result<ApiResponse<TransactionResponse>, ServiceError>;
}
