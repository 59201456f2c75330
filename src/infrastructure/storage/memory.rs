//! In-memory store implementations.
//!
//! Hash-map stores behind `tokio` read-write locks, with secondary indexes
//! kept alongside the primary map. Each method takes the lock once, so
//! every append is atomic with respect to its store and readers observe
//! insertion order.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Complaint, EvidenceItem, StatusHistoryEntry, TimelineEntry};
use crate::domain::repositories::{
    ComplaintRepository, EvidenceRepository, RepositoryError, TimelineRepository,
};
use crate::domain::value_objects::{ActorId, ComplaintId, ComplaintStatus, StationId};

/// In-memory structured record store: complaint rows, status history, and
/// victim/station secondary indexes.
#[derive(Default)]
pub struct InMemoryComplaintStore {
    records: Arc<RwLock<HashMap<ComplaintId, Complaint>>>,
    history: Arc<RwLock<HashMap<ComplaintId, Vec<StatusHistoryEntry>>>>,
    victim_index: Arc<RwLock<HashMap<ActorId, Vec<ComplaintId>>>>,
    station_index: Arc<RwLock<HashMap<StationId, Vec<ComplaintId>>>>,
}

impl InMemoryComplaintStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintStore {
    async fn insert(&self, complaint: &Complaint) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        if records.contains_key(&complaint.id) {
            return Err(RepositoryError::AlreadyExists);
        }
        records.insert(complaint.id.clone(), complaint.clone());
        drop(records);

        self.victim_index
            .write()
            .await
            .entry(complaint.victim_id.clone())
            .or_default()
            .push(complaint.id.clone());
        self.station_index
            .write()
            .await
            .entry(complaint.station_id.clone())
            .or_default()
            .push(complaint.id.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ComplaintId) -> Result<Option<Complaint>, RepositoryError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn find_by_victim(
        &self,
        victim_id: &ActorId,
    ) -> Result<Vec<Complaint>, RepositoryError> {
        let ids = self.victim_index.read().await.get(victim_id).cloned().unwrap_or_default();
        let records = self.records.read().await;
        Ok(ids.iter().filter_map(|id| records.get(id).cloned()).collect())
    }

    async fn find_by_station(
        &self,
        station_id: &StationId,
    ) -> Result<Vec<Complaint>, RepositoryError> {
        let ids = self.station_index.read().await.get(station_id).cloned().unwrap_or_default();
        let records = self.records.read().await;
        Ok(ids.iter().filter_map(|id| records.get(id).cloned()).collect())
    }

    async fn update_status(
        &self,
        id: &ComplaintId,
        expected: ComplaintStatus,
        to: ComplaintStatus,
    ) -> Result<Complaint, RepositoryError> {
        let mut records = self.records.write().await;
        let complaint = records.get_mut(id).ok_or(RepositoryError::NotFound)?;
        if complaint.current_status != expected {
            return Err(RepositoryError::Conflict);
        }
        complaint.current_status = to;
        Ok(complaint.clone())
    }

    async fn assign_officer(
        &self,
        id: &ComplaintId,
        officer_id: &ActorId,
    ) -> Result<Complaint, RepositoryError> {
        let mut records = self.records.write().await;
        let complaint = records.get_mut(id).ok_or(RepositoryError::NotFound)?;
        complaint.assigned_officer_id = Some(officer_id.clone());
        Ok(complaint.clone())
    }

    async fn append_history(&self, entry: &StatusHistoryEntry) -> Result<(), RepositoryError> {
        self.history
            .write()
            .await
            .entry(entry.complaint_id.clone())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn history_for(
        &self,
        id: &ComplaintId,
    ) -> Result<Vec<StatusHistoryEntry>, RepositoryError> {
        Ok(self.history.read().await.get(id).cloned().unwrap_or_default())
    }
}

/// In-memory append-only narrative log, one document per complaint.
#[derive(Default)]
pub struct InMemoryTimelineStore {
    docs: Arc<RwLock<HashMap<ComplaintId, Vec<TimelineEntry>>>>,
}

impl InMemoryTimelineStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TimelineRepository for InMemoryTimelineStore {
    async fn create_if_absent(&self, id: &ComplaintId) -> Result<(), RepositoryError> {
        self.docs.write().await.entry(id.clone()).or_default();
        Ok(())
    }

    async fn append(&self, entry: &TimelineEntry) -> Result<(), RepositoryError> {
        self.docs
            .write()
            .await
            .entry(entry.complaint_id.clone())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn entries_for(
        &self,
        id: &ComplaintId,
    ) -> Result<Vec<TimelineEntry>, RepositoryError> {
        Ok(self.docs.read().await.get(id).cloned().unwrap_or_default())
    }
}

/// In-memory evidence collection.
#[derive(Default)]
pub struct InMemoryEvidenceStore {
    items: Arc<RwLock<HashMap<ComplaintId, Vec<EvidenceItem>>>>,
}

impl InMemoryEvidenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EvidenceRepository for InMemoryEvidenceStore {
    async fn append(&self, item: &EvidenceItem) -> Result<(), RepositoryError> {
        self.items
            .write()
            .await
            .entry(item.complaint_id.clone())
            .or_default()
            .push(item.clone());
        Ok(())
    }

    async fn items_for(&self, id: &ComplaintId) -> Result<Vec<EvidenceItem>, RepositoryError> {
        Ok(self.items.read().await.get(id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::complaint::{Category, Severity};

    fn complaint(victim: &ActorId, station: &StationId) -> Complaint {
        Complaint::new(
            victim.clone(),
            station.clone(),
            "title".to_string(),
            "description".to_string(),
            "location".to_string(),
            Category::General,
            Severity::Low,
        )
    }

    #[tokio::test]
    async fn insert_rejects_duplicates() {
        let store = InMemoryComplaintStore::new();
        let c = complaint(&ActorId::new(), &StationId::new());
        store.insert(&c).await.unwrap();
        assert!(matches!(store.insert(&c).await, Err(RepositoryError::AlreadyExists)));
    }

    #[tokio::test]
    async fn status_cas_detects_stale_expectations() {
        let store = InMemoryComplaintStore::new();
        let c = complaint(&ActorId::new(), &StationId::new());
        store.insert(&c).await.unwrap();

        store
            .update_status(&c.id, ComplaintStatus::Pending, ComplaintStatus::Investigation)
            .await
            .unwrap();

        let stale = store
            .update_status(&c.id, ComplaintStatus::Pending, ComplaintStatus::Investigation)
            .await;
        assert!(matches!(stale, Err(RepositoryError::Conflict)));
    }

    #[tokio::test]
    async fn secondary_indexes_track_scope() {
        let store = InMemoryComplaintStore::new();
        let victim = ActorId::new();
        let station = StationId::new();

        let first = complaint(&victim, &station);
        let second = complaint(&victim, &station);
        let unrelated = complaint(&ActorId::new(), &StationId::new());
        store.insert(&first).await.unwrap();
        store.insert(&second).await.unwrap();
        store.insert(&unrelated).await.unwrap();

        assert_eq!(store.find_by_victim(&victim).await.unwrap().len(), 2);
        assert_eq!(store.find_by_station(&station).await.unwrap().len(), 2);
        assert_eq!(store.find_by_victim(&unrelated.victim_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn timeline_preserves_insertion_order() {
        let store = InMemoryTimelineStore::new();
        let id = ComplaintId::new();
        store.create_if_absent(&id).await.unwrap();

        for text in ["first", "second", "third"] {
            let entry = TimelineEntry::authored(
                id.clone(),
                text.to_string(),
                crate::domain::entities::AuthorRole::Victim,
                ActorId::new(),
                crate::domain::value_objects::Visibility::Public,
            );
            store.append(&entry).await.unwrap();
        }

        let texts: Vec<_> =
            store.entries_for(&id).await.unwrap().into_iter().map(|e| e.text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }
}
