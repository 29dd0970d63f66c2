//! Service history ledger, keyed by vehicle id

use std::collections::BTreeMap;

use crate::errors::{Result, TallerError};
use crate::schemas::{ServiceRecord, ServiceRecordPatch};
use crate::store::{Collection, Store};

/// Per-vehicle lists, each kept newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryRepository {
    records: BTreeMap<String, Vec<ServiceRecord>>,
}

/// Newest date first; equal dates keep their insertion order
fn sort_newest_first(records: &mut [ServiceRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

impl HistoryRepository {
    pub fn load<S: Store>(store: &S) -> Self {
        let mut records: BTreeMap<String, Vec<ServiceRecord>> = store.get(Collection::History);
        for list in records.values_mut() {
            sort_newest_first(list);
        }
        HistoryRepository { records }
    }

    pub fn persist<S: Store>(&self, store: &mut S) {
        store.set(Collection::History, &self.records);
    }

    /// Records for one vehicle; empty when it has none
    pub fn list(&self, vehicle_id: &str) -> &[ServiceRecord] {
        self.records
            .get(vehicle_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn add(&mut self, vehicle_id: &str, record: ServiceRecord) {
        let list = self.records.entry(vehicle_id.to_string()).or_default();
        list.push(record);
        sort_newest_first(list);
    }

    /// Patch a record in place and return the merged result
    pub fn update(
        &mut self,
        vehicle_id: &str,
        record_id: &str,
        patch: &ServiceRecordPatch,
    ) -> Result<ServiceRecord> {
        let not_found = || {
            TallerError::NotFound(format!("service record {} for vehicle {}", record_id, vehicle_id))
        };
        let list = self.records.get_mut(vehicle_id).ok_or_else(not_found)?;
        let slot = list
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(not_found)?;

        let updated = patch.apply(slot)?;
        *slot = updated.clone();
        sort_newest_first(list);
        Ok(updated)
    }

    /// Returns whether a record was removed
    pub fn remove(&mut self, vehicle_id: &str, record_id: &str) -> bool {
        let Some(list) = self.records.get_mut(vehicle_id) else {
            return false;
        };
        let before = list.len();
        list.retain(|r| r.id != record_id);
        list.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn record(id: &str, y: i32, m: u32, d: u32) -> ServiceRecord {
        ServiceRecord {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            service_type: "Cambio de aceite".to_string(),
            description: String::new(),
            mileage: 42_000,
            parts: None,
            evidence_url: None,
        }
    }

    fn ids(list: &[ServiceRecord]) -> Vec<&str> {
        list.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_list_unknown_vehicle_is_empty() {
        let repo = HistoryRepository::default();
        assert!(repo.list("v1").is_empty());
    }

    #[test]
    fn test_add_keeps_newest_first_and_stable() {
        let mut repo = HistoryRepository::default();
        repo.add("v1", record("a", 2024, 1, 10));
        repo.add("v1", record("b", 2024, 3, 1));
        repo.add("v1", record("c", 2024, 1, 10));
        assert_eq!(ids(repo.list("v1")), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_update_resorts() {
        let mut repo = HistoryRepository::default();
        repo.add("v1", record("a", 2024, 1, 10));
        repo.add("v1", record("b", 2024, 3, 1));

        let patch = ServiceRecordPatch {
            date: NaiveDate::from_ymd_opt(2024, 6, 1),
            mileage: Some(45_000),
            ..Default::default()
        };
        let updated = repo.update("v1", "a", &patch).unwrap();
        assert_eq!(updated.mileage, 45_000);
        assert_eq!(ids(repo.list("v1")), vec!["a", "b"]);
    }

    #[test]
    fn test_update_missing_record() {
        let mut repo = HistoryRepository::default();
        repo.add("v1", record("a", 2024, 1, 10));
        let patch = ServiceRecordPatch::default();
        assert!(matches!(repo.update("v1", "zz", &patch), Err(TallerError::NotFound(_))));
        assert!(matches!(repo.update("v2", "a", &patch), Err(TallerError::NotFound(_))));
    }

    #[test]
    fn test_remove() {
        let mut repo = HistoryRepository::default();
        repo.add("v1", record("a", 2024, 1, 10));
        assert!(!repo.remove("v1", "zz"));
        assert!(!repo.remove("v2", "a"));
        assert!(repo.remove("v1", "a"));
        assert!(repo.list("v1").is_empty());
    }

    #[test]
    fn test_load_sorts_unsorted_storage() {
        let mut store = MemoryStore::new();
        let mut map = BTreeMap::new();
        map.insert(
            "v1".to_string(),
            vec![record("old", 2023, 1, 1), record("new", 2024, 1, 1)],
        );
        store.set(Collection::History, &map);

        let repo = HistoryRepository::load(&store);
        assert_eq!(ids(repo.list("v1")), vec!["new", "old"]);
    }

    #[test]
    fn test_persist_keeps_other_vehicles() {
        let mut store = MemoryStore::new();
        let mut repo = HistoryRepository::default();
        repo.add("v1", record("a", 2024, 1, 10));
        repo.add("v2", record("b", 2024, 2, 10));
        repo.persist(&mut store);

        let mut reloaded = HistoryRepository::load(&store);
        reloaded.remove("v1", "a");
        reloaded.persist(&mut store);

        let again = HistoryRepository::load(&store);
        assert!(again.list("v1").is_empty());
        assert_eq!(ids(again.list("v2")), vec!["b"]);
    }
}
