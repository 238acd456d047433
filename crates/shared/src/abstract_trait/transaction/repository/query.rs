use crate::{
    domain::requests::FindAllTransactions, errors::RepositoryError,
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllTransactions,
    ) -> Result<(Vec<TransactionModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<TransactionModel>, RepositoryError>;
}
