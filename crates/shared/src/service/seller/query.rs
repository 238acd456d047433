use crate::{
    abstract_trait::seller::{
        repository::DynSellerQueryRepository, service::SellerQueryServiceTrait,
    },
    domain::{
        requests::FindAllSellers,
        responses::{ApiResponse, ApiResponsePagination, Pagination, SellerResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct SellerQueryService {
    query: DynSellerQueryRepository,
}

impl SellerQueryService {
    pub async fn new(query: DynSellerQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl SellerQueryServiceTrait for SellerQueryService {
    async fn find_all(
        &self,
        req: &FindAllSellers,
    ) -> Result<ApiResponsePagination<Vec<SellerResponse>>, ServiceError> {
        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        info!(
            "🔍 Searching sellers | Page: {}, Size: {}, Search: {:?}",
            page,
            page_size,
            if req.search.is_empty() { "None" } else { req.search.as_str() }
        );

        let req = FindAllSellers {
            page,
            page_size,
            search: req.search.clone(),
        };

        let (sellers, total_items) = self.query.find_all(&req).await.map_err(|e| {
            error!("❌ Failed to fetch sellers: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Found {} sellers", sellers.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Sellers retrieved successfully".to_string(),
            data: sellers.into_iter().map(SellerResponse::from).collect(),
            pagination: Pagination::new(page, page_size, total_items),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<SellerResponse>, ServiceError> {
        info!("🔍 Fetching seller {id}");

        let seller = self.query.find_by_id(id).await.map_err(|e| {
            error!("❌ Failed to fetch seller {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        let Some(seller) = seller else {
            warn!("🔎 Seller {id} not found");
            return Err(ServiceError::NotFound(format!("Seller with id {id} not found")));
        };

        Ok(ApiResponse::success(
            "Seller retrieved successfully",
            SellerResponse::from(seller),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::InMemoryStore;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn at(day: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    async fn service(store: &InMemoryStore) -> SellerQueryService {
        SellerQueryService::new(Arc::new(store.clone())).await
    }

    #[tokio::test]
    async fn lists_live_sellers_newest_first() {
        let store = InMemoryStore::new();
        store.seed_seller("Alice", at(1));
        let bob = store.seed_seller("Bob", at(2));
        store.seed_seller("Carol", at(3));
        store.mark_deleted(bob.id);

        let page = service(&store)
            .await
            .find_all(&FindAllSellers::default())
            .await
            .unwrap();

        let names: Vec<_> = page.data.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Carol", "Alice"]);
        assert_eq!(page.pagination.total_items, 2);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[tokio::test]
    async fn paginates_and_searches() {
        let store = InMemoryStore::new();
        for day in 1..=5 {
            store.seed_seller(&format!("Shop{day}"), at(day));
        }
        store.seed_seller("Market", at(6));

        let svc = service(&store).await;

        let second = svc
            .find_all(&FindAllSellers {
                page: 2,
                page_size: 2,
                search: "shop".into(),
            })
            .await
            .unwrap();
        let names: Vec<_> = second.data.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Shop3", "Shop2"]);
        assert_eq!(second.pagination.total_items, 5);
        assert_eq!(second.pagination.total_pages, 3);

        let defaults = svc
            .find_all(&FindAllSellers {
                page: 0,
                page_size: 0,
                search: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(defaults.pagination.page, 1);
        assert_eq!(defaults.pagination.page_size, 10);
        assert_eq!(defaults.data.len(), 6);
    }

    #[tokio::test]
    async fn deleted_or_missing_seller_is_not_found() {
        let store = InMemoryStore::new();
        let alice = store.seed_seller("Alice", at(1));
        let svc = service(&store).await;

        assert_eq!(svc.find_by_id(alice.id).await.unwrap().data.name, "Alice");

        store.mark_deleted(alice.id);
        assert!(matches!(
            svc.find_by_id(alice.id).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            svc.find_by_id(99).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
