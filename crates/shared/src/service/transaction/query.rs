use crate::{
    abstract_trait::transaction::{
        repository::DynTransactionQueryRepository, service::TransactionQueryServiceTrait,
    },
    domain::{
        requests::FindAllTransactions,
        responses::{ApiResponse, ApiResponsePagination, Pagination, TransactionResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct TransactionQueryService {
    query: DynTransactionQueryRepository,
}

impl TransactionQueryService {
    pub async fn new(query: DynTransactionQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl TransactionQueryServiceTrait for TransactionQueryService {
    async fn find_all(
        &self,
        req: &FindAllTransactions,
    ) -> Result<ApiResponsePagination<Vec<TransactionResponse>>, ServiceError> {
        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        info!(
            "🔍 Listing transactions | Page: {}, Size: {}, Seller: {:?}",
            page, page_size, req.seller_id
        );

        let req = FindAllTransactions {
            seller_id: req.seller_id,
            page,
            page_size,
        };

        let (transactions, total_items) = self.query.find_all(&req).await.map_err(|e| {
            error!("❌ Failed to fetch transactions: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Found {} transactions", transactions.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Transactions retrieved successfully".to_string(),
            data: transactions
                .into_iter()
                .map(TransactionResponse::from)
                .collect(),
            pagination: Pagination::new(page, page_size, total_items),
        })
    }

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        let transaction = self.query.find_by_id(id).await.map_err(|e| {
            error!("❌ Failed to fetch transaction {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        let Some(transaction) = transaction else {
            warn!("🔎 Transaction {id} not found");
            return Err(ServiceError::NotFound(format!(
                "Transaction with id {id} not found"
            )));
        };

        Ok(ApiResponse::success(
            "Transaction retrieved successfully",
            TransactionResponse::from(transaction),
        ))
    }
}
