use crate::{
    domain::requests::{CreateTransactionRequest, TransactionStatus},
    errors::RepositoryError,
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub type DynTransactionCommandRepository =
    Arc<dyn TransactionCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionCommandRepositoryTrait {
    /// Inserts a PENDING transaction without a transaction date.
    async fn create_pending(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError>;

    /// Moves `id` from `from` to `to` in one conditional update.
    ///
    /// `transaction_date` is only written when `Some`. Returns `None` when the
    /// row does not exist or is no longer in the `from` status.
    async fn transition_status(
        &self,
        id: i64,
        from: TransactionStatus,
        to: TransactionStatus,
        transaction_date: Option<NaiveDateTime>,
    ) -> Result<Option<TransactionModel>, RepositoryError>;
}
