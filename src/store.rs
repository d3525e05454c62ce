//! The record store: single source of truth for the collection and the
//! current filter criteria.
//!
//! Mutation happens only through the setters below; reads go through
//! [`RecordStore::dashboard`], which takes a consistent snapshot and runs
//! the full pipeline. Both pieces of state sit behind read-write locks so a
//! pipeline pass never observes a half-replaced collection while a refresh
//! is swapping it out.

use crate::engine::DashboardData;
use crate::models::record::{FilterCriteria, Selector, VulnerabilityRecord};
use async_lock::RwLock;

pub struct RecordStore {
    records: RwLock<Vec<VulnerabilityRecord>>,
    criteria: RwLock<FilterCriteria>,
}

impl RecordStore {
    pub fn new(records: Vec<VulnerabilityRecord>) -> Self {
        RecordStore {
            records: RwLock::new(records),
            criteria: RwLock::new(FilterCriteria::default()),
        }
    }

    /// Replaces the whole collection as one unit. No validation is
    /// performed here; malformed collections are accepted as-is.
    pub async fn replace_records(&self, records: Vec<VulnerabilityRecord>) {
        *self.records.write().await = records;
    }

    /// Re-runs the loader and swaps in whatever it returns. The loader is
    /// an opaque external operation; the store only guarantees the swap is
    /// atomic with respect to readers.
    pub async fn refresh<F, Fut>(&self, loader: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Vec<VulnerabilityRecord>>,
    {
        let records = loader().await;
        self.replace_records(records).await;
    }

    pub async fn set_search_term(&self, term: &str) {
        self.criteria.write().await.search_term = term.to_string();
    }

    pub async fn set_corporation(&self, selector: Selector) {
        self.criteria.write().await.corporation = selector;
    }

    pub async fn set_language(&self, selector: Selector) {
        self.criteria.write().await.language = selector;
    }

    pub async fn set_protocol(&self, selector: Selector) {
        self.criteria.write().await.protocol = selector;
    }

    pub async fn criteria(&self) -> FilterCriteria {
        self.criteria.read().await.clone()
    }

    pub async fn records(&self) -> Vec<VulnerabilityRecord> {
        self.records.read().await.clone()
    }

    /// Snapshots the collection and criteria, then runs the full
    /// filter-and-aggregate pipeline over the snapshot.
    pub async fn dashboard(&self) -> DashboardData {
        let records = self.records.read().await;
        let criteria = self.criteria.read().await;
        DashboardData::compute(&records, &criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_records;

    #[test]
    fn dashboard_reflects_criteria_setters() {
        smol::block_on(async {
            let store = RecordStore::new(sample_records());
            store.set_search_term("nginx").await;

            let data = store.dashboard().await;
            assert_eq!(data.subset.len(), 1);
            assert_eq!(data.subset[0].id, "CVE-2024-0002");
        });
    }

    #[test]
    fn replace_records_swaps_the_whole_collection() {
        smol::block_on(async {
            let store = RecordStore::new(sample_records());
            store.replace_records(Vec::new()).await;

            let data = store.dashboard().await;
            assert!(data.subset.is_empty());
            assert_eq!(data.stats.total, 0);
        });
    }

    #[test]
    fn refresh_replays_the_loader_collection() {
        smol::block_on(async {
            let store = RecordStore::new(Vec::new());
            store.refresh(|| async { sample_records() }).await;

            let data = store.dashboard().await;
            assert_eq!(data.stats.total, 5);
        });
    }

    #[test]
    fn criteria_survive_a_refresh() {
        smol::block_on(async {
            let store = RecordStore::new(sample_records());
            store.set_corporation(Selector::parse("Cisco")).await;
            store.refresh(|| async { sample_records() }).await;

            let data = store.dashboard().await;
            assert_eq!(data.subset.len(), 1);
            assert_eq!(data.subset[0].id, "CVE-2024-0004");
        });
    }
}
