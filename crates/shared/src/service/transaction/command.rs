use crate::{
    abstract_trait::{
        seller::repository::DynSellerQueryRepository,
        transaction::{
            repository::{DynTransactionCommandRepository, DynTransactionQueryRepository},
            service::TransactionCommandServiceTrait,
        },
    },
    domain::{
        requests::{CreateTransactionRequest, TransactionStatus},
        responses::{ApiResponse, TransactionResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use tracing::{error, info, warn};
use validator::Validate;

pub struct TransactionCommandService {
    seller_query: DynSellerQueryRepository,
    query: DynTransactionQueryRepository,
    command: DynTransactionCommandRepository,
}

impl TransactionCommandService {
    pub async fn new(
        seller_query: DynSellerQueryRepository,
        query: DynTransactionQueryRepository,
        command: DynTransactionCommandRepository,
    ) -> Self {
        Self {
            seller_query,
            query,
            command,
        }
    }

    async fn load(&self, id: i64) -> Result<TransactionModel, ServiceError> {
        let transaction = self.query.find_by_id(id).await.map_err(|e| {
            error!("❌ Failed to fetch transaction {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        transaction.ok_or_else(|| {
            warn!("🔎 Transaction {id} not found");
            ServiceError::NotFound(format!("Transaction with id {id} not found"))
        })
    }

    /// Moves a PENDING transaction to `target`.
    ///
    /// Already being in `target` is a no-op; any other status is rejected.
    async fn settle(
        &self,
        id: i64,
        target: TransactionStatus,
        transaction_date: Option<NaiveDateTime>,
    ) -> Result<TransactionModel, ServiceError> {
        let current = self.load(id).await?;

        match status_of(&current)? {
            status if status == target => {
                info!("↩️ Transaction {id} already {target}");
                return Ok(current);
            }
            TransactionStatus::Pending => {}
            other => {
                warn!("⛔ Transaction {id} is {other}, cannot become {target}");
                return Err(ServiceError::InvalidTransaction(format!(
                    "Transaction {id} is {other} and cannot be moved to {target}"
                )));
            }
        }

        let moved = self
            .command
            .transition_status(id, TransactionStatus::Pending, target, transaction_date)
            .await
            .map_err(|e| {
                error!("💥 Failed to move transaction {id} to {target}: {e:?}");
                ServiceError::Repo(e)
            })?;

        if let Some(transaction) = moved {
            return Ok(transaction);
        }

        // Another request changed the status between the read and the update.
        let latest = self.load(id).await?;
        if status_of(&latest)? == target {
            return Ok(latest);
        }

        Err(ServiceError::InvalidTransaction(format!(
            "Transaction {id} is no longer PENDING"
        )))
    }
}

fn status_of(transaction: &TransactionModel) -> Result<TransactionStatus, ServiceError> {
    transaction.status.parse().map_err(|e: String| {
        error!("💥 Transaction {} has corrupt status: {e}", transaction.id);
        ServiceError::InternalServerError(e)
    })
}

#[async_trait]
impl TransactionCommandServiceTrait for TransactionCommandService {
    async fn create_pending(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            warn!("⚠️ Transaction validation failed: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!(
            "🆕 Creating pending transaction seller_id={} amount={} type={}",
            req.seller_id, req.amount, req.payment_type
        );

        let seller = self
            .seller_query
            .find_by_id(req.seller_id)
            .await
            .map_err(|e| {
                error!("👤 Failed to look up seller {}: {e:?}", req.seller_id);
                ServiceError::Repo(e)
            })?;

        if seller.is_none() {
            warn!("⛔ Seller {} missing or deleted", req.seller_id);
            return Err(ServiceError::InvalidSeller(format!(
                "Seller with id {} does not exist or is deleted",
                req.seller_id
            )));
        }

        let transaction = self.command.create_pending(req).await.map_err(|e| match e {
            RepositoryError::ForeignKey(msg) => {
                warn!("⛔ Seller {} vanished during insert: {msg}", req.seller_id);
                ServiceError::InvalidSeller(format!(
                    "Seller with id {} does not exist or is deleted",
                    req.seller_id
                ))
            }
            other => {
                error!("💥 Failed to create transaction: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        info!("✅ Pending transaction {} created", transaction.id);

        Ok(ApiResponse::success(
            "Transaction created successfully",
            TransactionResponse::from(transaction),
        ))
    }

    async fn complete(&self, id: i64) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        info!("💳 Completing transaction {id}");

        let now = Local::now().naive_local();
        let transaction = self
            .settle(id, TransactionStatus::Completed, Some(now))
            .await?;

        Ok(ApiResponse::success(
            "Transaction completed successfully",
            TransactionResponse::from(transaction),
        ))
    }

    async fn cancel(&self, id: i64) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        info!("🚫 Canceling transaction {id}");

        let transaction = self.settle(id, TransactionStatus::Canceled, None).await?;

        Ok(ApiResponse::success(
            "Transaction canceled successfully",
            TransactionResponse::from(transaction),
        ))
    }
}
