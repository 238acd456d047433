use shared::{
    abstract_trait::{
        analytics::{DynAnalyticsRepository, DynAnalyticsService},
        seller::{
            repository::{DynSellerCommandRepository, DynSellerQueryRepository},
            service::{DynSellerCommandService, DynSellerQueryService},
        },
        transaction::{
            repository::{DynTransactionCommandRepository, DynTransactionQueryRepository},
            service::{DynTransactionCommandService, DynTransactionQueryService},
        },
    },
    config::ConnectionPool,
    repository::{
        AnalyticsRepository, SellerCommandRepository, SellerQueryRepository,
        TransactionCommandRepository, TransactionQueryRepository,
    },
    service::{
        AnalyticsService, SellerCommandService, SellerQueryService, TransactionCommandService,
        TransactionQueryService,
    },
};
use std::sync::Arc;

/// Storage seams the services are built on.
#[derive(Clone)]
pub struct Repositories {
    pub seller_query: DynSellerQueryRepository,
    pub seller_command: DynSellerCommandRepository,
    pub transaction_query: DynTransactionQueryRepository,
    pub transaction_command: DynTransactionCommandRepository,
    pub analytics: DynAnalyticsRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            seller_query: Arc::new(SellerQueryRepository::new(pool.clone()))
                as DynSellerQueryRepository,
            seller_command: Arc::new(SellerCommandRepository::new(pool.clone()))
                as DynSellerCommandRepository,
            transaction_query: Arc::new(TransactionQueryRepository::new(pool.clone()))
                as DynTransactionQueryRepository,
            transaction_command: Arc::new(TransactionCommandRepository::new(pool.clone()))
                as DynTransactionCommandRepository,
            analytics: Arc::new(AnalyticsRepository::new(pool)) as DynAnalyticsRepository,
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub seller_query: DynSellerQueryService,
    pub seller_command: DynSellerCommandService,
    pub transaction_query: DynTransactionQueryService,
    pub transaction_command: DynTransactionCommandService,
    pub analytics: DynAnalyticsService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("seller_query", &"SellerQueryService")
            .field("seller_command", &"SellerCommandService")
            .field("transaction_query", &"TransactionQueryService")
            .field("transaction_command", &"TransactionCommandService")
            .field("analytics", &"AnalyticsService")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(repos: Repositories) -> Self {
        let seller_query = Arc::new(SellerQueryService::new(repos.seller_query.clone()).await)
            as DynSellerQueryService;

        let seller_command =
            Arc::new(SellerCommandService::new(repos.seller_command.clone()).await)
                as DynSellerCommandService;

        let transaction_query =
            Arc::new(TransactionQueryService::new(repos.transaction_query.clone()).await)
                as DynTransactionQueryService;

        let transaction_command = Arc::new(
            TransactionCommandService::new(
                repos.seller_query.clone(),
                repos.transaction_query.clone(),
                repos.transaction_command.clone(),
            )
            .await,
        ) as DynTransactionCommandService;

        let analytics = Arc::new(
            AnalyticsService::new(repos.seller_query.clone(), repos.analytics.clone()).await,
        ) as DynAnalyticsService;

        Self {
            seller_query,
            seller_command,
            transaction_query,
            transaction_command,
            analytics,
        }
    }
}
