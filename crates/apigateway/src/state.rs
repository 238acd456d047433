use crate::di::{DependenciesInject, Repositories};
use shared::{config::ConnectionPool, utils::Metrics};

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub metrics: Metrics,
}

impl AppState {
    pub async fn new(pool: ConnectionPool) -> Self {
        Self::with_repositories(Repositories::postgres(pool)).await
    }

    pub async fn with_repositories(repos: Repositories) -> Self {
        Self {
            di_container: DependenciesInject::new(repos).await,
            metrics: Metrics::new(),
        }
    }
}
