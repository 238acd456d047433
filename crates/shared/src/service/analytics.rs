use crate::{
    abstract_trait::{
        analytics::{AnalyticsServiceTrait, DynAnalyticsRepository},
        seller::repository::DynSellerQueryRepository,
    },
    domain::{
        requests::PeriodType,
        responses::{ApiResponse, BestPeriodResponse, SellerStatsResponse},
    },
    errors::ServiceError,
    utils::{advance, compute_interval},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{error, info, warn};

/// Sales analytics over completed transactions.
pub struct AnalyticsService {
    seller_query: DynSellerQueryRepository,
    analytics: DynAnalyticsRepository,
}

impl AnalyticsService {
    pub async fn new(
        seller_query: DynSellerQueryRepository,
        analytics: DynAnalyticsRepository,
    ) -> Self {
        Self {
            seller_query,
            analytics,
        }
    }
}

#[async_trait]
impl AnalyticsServiceTrait for AnalyticsService {
    async fn get_top_seller(
        &self,
        kind: PeriodType,
        reference_date: NaiveDate,
    ) -> Result<ApiResponse<SellerStatsResponse>, ServiceError> {
        let period = compute_interval(kind, reference_date)?;

        info!(
            "🏆 Top seller for {kind} containing {reference_date} | [{}, {})",
            period.start, period.end
        );

        let rows = self
            .analytics
            .find_top_sellers(period.start, period.end)
            .await
            .map_err(|e| {
                error!("❌ Failed to aggregate top sellers: {e:?}");
                ServiceError::Repo(e)
            })?;

        let Some(top) = rows.into_iter().next() else {
            warn!("📭 No completed sales in [{}, {})", period.start, period.end);
            return Err(ServiceError::NotFound(format!(
                "No completed transactions in the {kind} containing {reference_date}"
            )));
        };

        info!("✅ Top seller {} with {}", top.seller_id, top.total_amount);

        Ok(ApiResponse::success(
            "Top seller retrieved successfully",
            SellerStatsResponse::from(top),
        ))
    }

    async fn get_sellers_below_total(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        max_total: Decimal,
    ) -> Result<ApiResponse<Vec<SellerStatsResponse>>, ServiceError> {
        if to <= from {
            warn!("⚠️ Rejected empty window [{from}, {to})");
            return Err(ServiceError::Validation(vec![format!(
                "to: must be after from ({from})"
            )]));
        }

        info!("📉 Sellers below {max_total} in [{from}, {to})");

        let rows = self
            .analytics
            .find_sellers_below(from, to, max_total)
            .await
            .map_err(|e| {
                error!("❌ Failed to aggregate sellers below {max_total}: {e:?}");
                ServiceError::Repo(e)
            })?;

        info!("✅ {} sellers below {max_total}", rows.len());

        Ok(ApiResponse::success(
            "Sellers retrieved successfully",
            rows.into_iter().map(SellerStatsResponse::from).collect(),
        ))
    }

    async fn get_best_period_for_seller(
        &self,
        seller_id: i64,
        kind: PeriodType,
    ) -> Result<ApiResponse<BestPeriodResponse>, ServiceError> {
        info!("📈 Best {kind} for seller {seller_id}");

        let seller = self.seller_query.find_by_id(seller_id).await.map_err(|e| {
            error!("❌ Failed to look up seller {seller_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if seller.is_none() {
            warn!("🔎 Seller {seller_id} not found");
            return Err(ServiceError::NotFound(format!(
                "Seller with id {seller_id} not found"
            )));
        }

        let best = self
            .analytics
            .find_best_period(seller_id, kind)
            .await
            .map_err(|e| {
                error!("❌ Failed to bucket sales for seller {seller_id}: {e:?}");
                ServiceError::Repo(e)
            })?;

        let Some(best) = best else {
            warn!("📭 Seller {seller_id} has no completed transactions");
            return Err(ServiceError::NotFound(format!(
                "Seller with id {seller_id} has no completed transactions"
            )));
        };

        let period_end = advance(best.period_start, kind)?;

        Ok(ApiResponse::success(
            "Best period retrieved successfully",
            BestPeriodResponse {
                seller_id,
                period_type: kind,
                period_start: best.period_start,
                period_end,
                transaction_count: best.transaction_count,
                total_amount: best.total_amount,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::requests::TransactionStatus, repository::memory::InMemoryStore};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(10, 30, 0).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
    }

    async fn service(store: &InMemoryStore) -> AnalyticsService {
        AnalyticsService::new(Arc::new(store.clone()), Arc::new(store.clone())).await
    }

    fn completed(store: &InMemoryStore, seller_id: i64, amount: Decimal, when: NaiveDateTime) {
        store.seed_transaction(seller_id, amount, TransactionStatus::Completed, Some(when));
    }

    #[tokio::test]
    async fn top_seller_is_highest_total() {
        let store = InMemoryStore::new();
        let alice = store.seed_seller("Alice", at(2023, 1, 1));
        let bob = store.seed_seller("Bob", at(2023, 1, 1));
        completed(&store, alice.id, dec!(100), at(2024, 1, 5));
        completed(&store, alice.id, dec!(200), at(2024, 1, 20));
        completed(&store, bob.id, dec!(50), at(2024, 1, 10));

        let top = service(&store)
            .await
            .get_top_seller(PeriodType::Month, date(2024, 1, 10))
            .await
            .unwrap()
            .data;

        assert_eq!(top.seller_id, alice.id);
        assert_eq!(top.seller_name, "Alice");
        assert_eq!(top.total_amount, dec!(300));
    }

    #[tokio::test]
    async fn top_seller_ties_go_to_lowest_id() {
        let store = InMemoryStore::new();
        let first = store.seed_seller("First", at(2023, 1, 1));
        let second = store.seed_seller("Second", at(2023, 1, 1));
        completed(&store, second.id, dec!(80), at(2024, 3, 3));
        completed(&store, first.id, dec!(80), at(2024, 3, 4));

        let top = service(&store)
            .await
            .get_top_seller(PeriodType::Month, date(2024, 3, 1))
            .await
            .unwrap()
            .data;

        assert_eq!(top.seller_id, first.id);
    }

    #[tokio::test]
    async fn top_seller_without_completed_sales_is_not_found() {
        let store = InMemoryStore::new();
        let alice = store.seed_seller("Alice", at(2023, 1, 1));
        store.seed_transaction(alice.id, dec!(500), TransactionStatus::Pending, None);
        store.seed_transaction(
            alice.id,
            dec!(500),
            TransactionStatus::Canceled,
            Some(at(2024, 1, 10)),
        );
        completed(&store, alice.id, dec!(10), at(2024, 2, 1));

        let result = service(&store)
            .await
            .get_top_seller(PeriodType::Month, date(2024, 1, 10))
            .await;

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn window_end_is_exclusive() {
        let store = InMemoryStore::new();
        let alice = store.seed_seller("Alice", at(2023, 1, 1));
        completed(&store, alice.id, dec!(10), midnight(2024, 1, 8));

        let svc = service(&store).await;

        // 2024-01-08 is the Monday after the week of 2024-01-03.
        let result = svc.get_top_seller(PeriodType::Week, date(2024, 1, 3)).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));

        let next = svc
            .get_top_seller(PeriodType::Week, date(2024, 1, 8))
            .await
            .unwrap();
        assert_eq!(next.data.total_amount, dec!(10));
    }

    #[tokio::test]
    async fn deleted_sellers_do_not_rank() {
        let store = InMemoryStore::new();
        let alice = store.seed_seller("Alice", at(2023, 1, 1));
        let bob = store.seed_seller("Bob", at(2023, 1, 1));
        completed(&store, alice.id, dec!(900), at(2024, 1, 5));
        completed(&store, bob.id, dec!(10), at(2024, 1, 5));
        store.mark_deleted(alice.id);

        let top = service(&store)
            .await
            .get_top_seller(PeriodType::Year, date(2024, 6, 1))
            .await
            .unwrap()
            .data;

        assert_eq!(top.seller_id, bob.id);
    }

    #[tokio::test]
    async fn sellers_below_threshold_is_strict() {
        let store = InMemoryStore::new();
        let alice = store.seed_seller("Alice", at(2023, 1, 1));
        let bob = store.seed_seller("Bob", at(2023, 1, 1));
        let carol = store.seed_seller("Carol", at(2023, 1, 1));
        store.seed_seller("Idle", at(2023, 1, 1));
        completed(&store, alice.id, dec!(100), at(2024, 1, 5));
        completed(&store, bob.id, dec!(200), at(2024, 1, 6));
        completed(&store, carol.id, dec!(40), at(2024, 1, 7));
        store.seed_transaction(carol.id, dec!(1000), TransactionStatus::Pending, None);

        let rows = service(&store)
            .await
            .get_sellers_below_total(midnight(2024, 1, 1), midnight(2024, 2, 1), dec!(200))
            .await
            .unwrap()
            .data;

        let ids: Vec<_> = rows.iter().map(|r| r.seller_id).collect();
        assert_eq!(ids, [carol.id, alice.id]);
    }

    #[tokio::test]
    async fn sellers_below_rejects_inverted_window() {
        let store = InMemoryStore::new();
        let result = service(&store)
            .await
            .get_sellers_below_total(midnight(2024, 2, 1), midnight(2024, 1, 1), dec!(1))
            .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn best_month_is_january() {
        let store = InMemoryStore::new();
        let alice = store.seed_seller("Alice", at(2023, 1, 1));
        completed(&store, alice.id, dec!(100), at(2024, 1, 5));
        completed(&store, alice.id, dec!(200), at(2024, 1, 25));
        completed(&store, alice.id, dec!(50), at(2024, 2, 3));

        let best = service(&store)
            .await
            .get_best_period_for_seller(alice.id, PeriodType::Month)
            .await
            .unwrap()
            .data;

        assert_eq!(best.seller_id, alice.id);
        assert_eq!(best.period_type, PeriodType::Month);
        assert_eq!(best.transaction_count, 2);
        assert_eq!(best.total_amount, dec!(300));
        assert_eq!(best.period_start, midnight(2024, 1, 1));
        assert_eq!(best.period_end, midnight(2024, 2, 1));
    }

    #[tokio::test]
    async fn best_period_ties_go_to_earliest_bucket() {
        let store = InMemoryStore::new();
        let alice = store.seed_seller("Alice", at(2023, 1, 1));
        completed(&store, alice.id, dec!(70), at(2024, 9, 2));
        completed(&store, alice.id, dec!(70), at(2024, 2, 2));

        let best = service(&store)
            .await
            .get_best_period_for_seller(alice.id, PeriodType::Quarter)
            .await
            .unwrap()
            .data;

        assert_eq!(best.period_start, midnight(2024, 1, 1));
        assert_eq!(best.period_end, midnight(2024, 4, 1));
    }

    #[tokio::test]
    async fn best_period_not_found_cases() {
        let store = InMemoryStore::new();
        let idle = store.seed_seller("Idle", at(2023, 1, 1));
        let gone = store.seed_seller("Gone", at(2023, 1, 1));
        completed(&store, gone.id, dec!(10), at(2024, 1, 1));
        store.mark_deleted(gone.id);
        let svc = service(&store).await;

        for seller_id in [idle.id, gone.id, 404] {
            let result = svc
                .get_best_period_for_seller(seller_id, PeriodType::Day)
                .await;
            assert!(
                matches!(result, Err(ServiceError::NotFound(_))),
                "seller {seller_id}"
            );
        }
    }
}
