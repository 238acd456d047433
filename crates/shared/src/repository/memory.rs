//! Process-local store implementing every repository trait, used by tests.
//!
//! Aggregates follow the same rules as the SQL repositories: only COMPLETED
//! transactions of live sellers count, windows are half-open and ties resolve
//! to the lowest seller id or the earliest bucket.

use crate::{
    abstract_trait::{
        analytics::AnalyticsRepositoryTrait,
        seller::repository::{SellerCommandRepositoryTrait, SellerQueryRepositoryTrait},
        transaction::repository::{
            TransactionCommandRepositoryTrait, TransactionQueryRepositoryTrait,
        },
    },
    domain::requests::{
        CreateSellerRequest, CreateTransactionRequest, FindAllSellers, FindAllTransactions,
        PaymentType, PeriodType, TransactionStatus, UpdateSellerRequest,
    },
    errors::RepositoryError,
    model::{
        analytics::{SellerBestPeriodModel, SellerSalesModel},
        seller::SellerModel,
        transaction::TransactionModel,
    },
    utils::compute_interval,
};
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

#[derive(Default)]
struct State {
    sellers: Vec<SellerModel>,
    transactions: Vec<TransactionModel>,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn seed_seller(&self, name: &str, registration_date: NaiveDateTime) -> SellerModel {
        let mut state = self.lock();
        let seller = SellerModel {
            id: state.sellers.len() as i64 + 1,
            name: name.to_string(),
            contact_info: format!("{}@example.com", name.to_lowercase()),
            registration_date,
            deleted: false,
        };
        state.sellers.push(seller.clone());
        seller
    }

    pub fn seed_transaction(
        &self,
        seller_id: i64,
        amount: Decimal,
        status: TransactionStatus,
        transaction_date: Option<NaiveDateTime>,
    ) -> TransactionModel {
        let mut state = self.lock();
        let transaction = TransactionModel {
            id: state.transactions.len() as i64 + 1,
            seller_id,
            amount,
            payment_type: PaymentType::Card.as_str().to_string(),
            status: status.as_str().to_string(),
            created_at: transaction_date.unwrap_or_else(now),
            transaction_date,
        };
        state.transactions.push(transaction.clone());
        transaction
    }

    pub fn mark_deleted(&self, seller_id: i64) {
        let mut state = self.lock();
        if let Some(seller) = state.sellers.iter_mut().find(|s| s.id == seller_id) {
            seller.deleted = true;
        }
    }

    fn sales_per_seller(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<SellerSalesModel> {
        let state = self.lock();
        let mut totals: BTreeMap<i64, Decimal> = BTreeMap::new();

        for tx in state.transactions.iter().filter(|tx| counts(&state, tx)) {
            let Some(at) = tx.transaction_date else {
                continue;
            };
            if from <= at && at < to {
                *totals.entry(tx.seller_id).or_default() += tx.amount;
            }
        }

        totals
            .into_iter()
            .filter_map(|(seller_id, total_amount)| {
                let seller = state.sellers.iter().find(|s| s.id == seller_id)?;
                Some(SellerSalesModel {
                    seller_id,
                    seller_name: seller.name.clone(),
                    total_amount,
                })
            })
            .collect()
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn counts(state: &State, tx: &TransactionModel) -> bool {
    tx.status == TransactionStatus::Completed.as_str()
        && state
            .sellers
            .iter()
            .any(|s| s.id == tx.seller_id && !s.deleted)
}

fn paginate<T: Clone>(items: &[T], page: i32, page_size: i32) -> Vec<T> {
    let limit = page_size.clamp(1, 100) as usize;
    let offset = (page - 1).max(0) as usize * limit;
    items.iter().skip(offset).take(limit).cloned().collect()
}

#[async_trait]
impl SellerQueryRepositoryTrait for InMemoryStore {
    async fn find_all(
        &self,
        req: &FindAllSellers,
    ) -> Result<(Vec<SellerModel>, i64), RepositoryError> {
        let needle = req.search.trim().to_lowercase();
        let mut live: Vec<SellerModel> = self
            .lock()
            .sellers
            .iter()
            .filter(|s| !s.deleted)
            .filter(|s| {
                needle.is_empty()
                    || s.name.to_lowercase().contains(&needle)
                    || s.contact_info.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        live.sort_by(|a, b| {
            b.registration_date
                .cmp(&a.registration_date)
                .then(b.id.cmp(&a.id))
        });

        let total = live.len() as i64;
        Ok((paginate(&live, req.page, req.page_size), total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SellerModel>, RepositoryError> {
        Ok(self
            .lock()
            .sellers
            .iter()
            .find(|s| s.id == id && !s.deleted)
            .cloned())
    }
}

#[async_trait]
impl SellerCommandRepositoryTrait for InMemoryStore {
    async fn create(&self, req: &CreateSellerRequest) -> Result<SellerModel, RepositoryError> {
        let mut state = self.lock();
        let seller = SellerModel {
            id: state.sellers.len() as i64 + 1,
            name: req.name.clone(),
            contact_info: req.contact_info.clone(),
            registration_date: now(),
            deleted: false,
        };
        state.sellers.push(seller.clone());
        Ok(seller)
    }

    async fn update(
        &self,
        id: i64,
        req: &UpdateSellerRequest,
    ) -> Result<Option<SellerModel>, RepositoryError> {
        let mut state = self.lock();
        let Some(seller) = state.sellers.iter_mut().find(|s| s.id == id && !s.deleted) else {
            return Ok(None);
        };

        if let Some(name) = &req.name {
            seller.name = name.clone();
        }
        if let Some(contact_info) = &req.contact_info {
            seller.contact_info = contact_info.clone();
        }

        Ok(Some(seller.clone()))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut state = self.lock();
        match state.sellers.iter_mut().find(|s| s.id == id && !s.deleted) {
            Some(seller) => {
                seller.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for InMemoryStore {
    async fn find_all(
        &self,
        req: &FindAllTransactions,
    ) -> Result<(Vec<TransactionModel>, i64), RepositoryError> {
        let mut matching: Vec<TransactionModel> = self
            .lock()
            .transactions
            .iter()
            .filter(|tx| req.seller_id.is_none_or(|id| tx.seller_id == id))
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as i64;
        Ok((paginate(&matching, req.page, req.page_size), total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TransactionModel>, RepositoryError> {
        Ok(self.lock().transactions.iter().find(|tx| tx.id == id).cloned())
    }
}

#[async_trait]
impl TransactionCommandRepositoryTrait for InMemoryStore {
    async fn create_pending(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut state = self.lock();

        if !state.sellers.iter().any(|s| s.id == req.seller_id) {
            return Err(RepositoryError::ForeignKey(format!(
                "seller {} does not exist",
                req.seller_id
            )));
        }

        let transaction = TransactionModel {
            id: state.transactions.len() as i64 + 1,
            seller_id: req.seller_id,
            amount: req.amount,
            payment_type: req.payment_type.as_str().to_string(),
            status: TransactionStatus::Pending.as_str().to_string(),
            created_at: now(),
            transaction_date: None,
        };
        state.transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn transition_status(
        &self,
        id: i64,
        from: TransactionStatus,
        to: TransactionStatus,
        transaction_date: Option<NaiveDateTime>,
    ) -> Result<Option<TransactionModel>, RepositoryError> {
        let mut state = self.lock();
        let Some(tx) = state
            .transactions
            .iter_mut()
            .find(|tx| tx.id == id && tx.status == from.as_str())
        else {
            return Ok(None);
        };

        tx.status = to.as_str().to_string();
        if transaction_date.is_some() {
            tx.transaction_date = transaction_date;
        }

        Ok(Some(tx.clone()))
    }
}

#[async_trait]
impl AnalyticsRepositoryTrait for InMemoryStore {
    async fn find_top_sellers(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<SellerSalesModel>, RepositoryError> {
        let mut rows = self.sales_per_seller(from, to);
        rows.sort_by(|a, b| {
            b.total_amount
                .cmp(&a.total_amount)
                .then(a.seller_id.cmp(&b.seller_id))
        });
        Ok(rows)
    }

    async fn find_sellers_below(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        max_total: Decimal,
    ) -> Result<Vec<SellerSalesModel>, RepositoryError> {
        let mut rows: Vec<SellerSalesModel> = self
            .sales_per_seller(from, to)
            .into_iter()
            .filter(|row| row.total_amount < max_total)
            .collect();
        rows.sort_by(|a, b| {
            a.total_amount
                .cmp(&b.total_amount)
                .then(a.seller_id.cmp(&b.seller_id))
        });
        Ok(rows)
    }

    async fn find_best_period(
        &self,
        seller_id: i64,
        kind: PeriodType,
    ) -> Result<Option<SellerBestPeriodModel>, RepositoryError> {
        let state = self.lock();
        let mut buckets: BTreeMap<NaiveDateTime, (i64, Decimal)> = BTreeMap::new();

        for tx in state
            .transactions
            .iter()
            .filter(|tx| tx.seller_id == seller_id && counts(&state, tx))
        {
            let Some(at) = tx.transaction_date else {
                continue;
            };
            let period = compute_interval(kind, at.date())
                .map_err(|e| RepositoryError::Custom(e.to_string()))?;
            let bucket = buckets.entry(period.start).or_default();
            bucket.0 += 1;
            bucket.1 += tx.amount;
        }

        // BTreeMap iterates by start ascending, so the first maximum wins ties.
        let best = buckets
            .into_iter()
            .fold(None::<SellerBestPeriodModel>, |best, (start, (count, total))| {
                match best {
                    Some(current) if current.total_amount >= total => Some(current),
                    _ => Some(SellerBestPeriodModel {
                        period_start: start,
                        transaction_count: count,
                        total_amount: total,
                    }),
                }
            });

        Ok(best)
    }
}
