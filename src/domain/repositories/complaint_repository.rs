//! Complaint record store interface.
//!
//! Covers the structured side of the case: the complaint row, its status,
//! and the append-only status history, with secondary lookups by victim
//! and station.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::{Complaint, StatusHistoryEntry};
use crate::domain::value_objects::{ActorId, ComplaintId, ComplaintStatus, StationId};

/// Contract for the structured record store.
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Persist a newly filed complaint.
    async fn insert(&self, complaint: &Complaint) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: &ComplaintId) -> Result<Option<Complaint>, RepositoryError>;

    /// All complaints owned by a victim, oldest first.
    async fn find_by_victim(&self, victim_id: &ActorId) -> Result<Vec<Complaint>, RepositoryError>;

    /// All complaints assigned to a station, oldest first.
    async fn find_by_station(
        &self,
        station_id: &StationId,
    ) -> Result<Vec<Complaint>, RepositoryError>;

    /// Compare-and-swap status write: applies `to` only if the stored
    /// status still equals `expected`, otherwise fails with `Conflict`.
    /// Returns the updated complaint.
    async fn update_status(
        &self,
        id: &ComplaintId,
        expected: ComplaintStatus,
        to: ComplaintStatus,
    ) -> Result<Complaint, RepositoryError>;

    /// Set the assigned officer. Returns the updated complaint.
    async fn assign_officer(
        &self,
        id: &ComplaintId,
        officer_id: &ActorId,
    ) -> Result<Complaint, RepositoryError>;

    /// Append one row to the status audit trail.
    async fn append_history(&self, entry: &StatusHistoryEntry) -> Result<(), RepositoryError>;

    /// Full status history for a complaint, in transition order.
    async fn history_for(
        &self,
        id: &ComplaintId,
    ) -> Result<Vec<StatusHistoryEntry>, RepositoryError>;
}
