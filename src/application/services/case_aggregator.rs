//! Case Aggregator
//!
//! Read path. Composes one unified case view from the record store and the
//! document store, applying the visibility filter before anything leaves
//! the service. The cheaper list paths return abbreviated metadata only.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::application::guard::AuthorizationGuard;
use crate::config::EngineConfig;
use crate::domain::entities::{
    Category, Complaint, EvidenceItem, Severity, StatusHistoryEntry, TimelineEntry,
};
use crate::domain::repositories::{
    DynComplaintRepository, DynEvidenceRepository, DynTimelineRepository,
};
use crate::domain::value_objects::{
    filter_disclosable, Actor, ActorId, ComplaintId, ComplaintStatus, StationId,
};
use crate::errors::ComplaintError;

/// A complaint composed with its authoritative history and its filtered
/// narrative. Timeline and evidence are ordered oldest first (insertion
/// order); history is never filtered, both parties may audit it in full.
#[derive(Debug, Clone, Serialize)]
pub struct CaseView {
    pub complaint: Complaint,
    pub history: Vec<StatusHistoryEntry>,
    pub timeline: Vec<TimelineEntry>,
    pub evidence: Vec<EvidenceItem>,
}

/// Abbreviated complaint metadata for the list paths.
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintSummary {
    pub id: ComplaintId,
    pub title: String,
    pub category: Category,
    pub severity: Severity,
    pub current_status: ComplaintStatus,
    pub station_id: StationId,
    pub victim_id: ActorId,
    pub assigned_officer_id: Option<ActorId>,
    pub created_at: DateTime<Utc>,
}

impl From<Complaint> for ComplaintSummary {
    fn from(complaint: Complaint) -> Self {
        Self {
            id: complaint.id,
            title: complaint.title,
            category: complaint.category,
            severity: complaint.severity,
            current_status: complaint.current_status,
            station_id: complaint.station_id,
            victim_id: complaint.victim_id,
            assigned_officer_id: complaint.assigned_officer_id,
            created_at: complaint.created_at,
        }
    }
}

/// Composes unified, authorization-aware case views.
pub struct CaseAggregator {
    complaints: DynComplaintRepository,
    timeline: DynTimelineRepository,
    evidence: DynEvidenceRepository,
    guard: AuthorizationGuard,
    config: EngineConfig,
}

impl CaseAggregator {
    pub fn new(
        complaints: DynComplaintRepository,
        timeline: DynTimelineRepository,
        evidence: DynEvidenceRepository,
        config: EngineConfig,
    ) -> Self {
        Self { complaints, timeline, evidence, guard: AuthorizationGuard::new(), config }
    }

    /// The full case view for a viewer. Fails `NotFound` for unknown ids
    /// before any authorization verdict, `Forbidden` for actors who are
    /// neither the owning victim nor a station officer.
    pub async fn get_case(
        &self,
        id: &ComplaintId,
        viewer: &Actor,
    ) -> Result<CaseView, ComplaintError> {
        let complaint = self
            .complaints
            .find_by_id(id)
            .await
            .map_err(|err| ComplaintError::store("complaints.find_by_id", err))?
            .ok_or_else(|| ComplaintError::not_found(id))?;
        self.guard.can_view(viewer, &complaint)?;

        let relation = complaint.viewer(viewer);

        let history = self
            .complaints
            .history_for(id)
            .await
            .map_err(|err| ComplaintError::store("complaints.history_for", err))?;
        let timeline = self
            .timeline
            .entries_for(id)
            .await
            .map_err(|err| ComplaintError::store("timeline.entries_for", err))?;
        let evidence = self
            .evidence
            .items_for(id)
            .await
            .map_err(|err| ComplaintError::store("evidence.items_for", err))?;

        debug!(
            complaint = %id,
            viewer = %viewer.id,
            entries = timeline.len(),
            items = evidence.len(),
            "case view composed"
        );

        Ok(CaseView {
            complaint,
            history,
            timeline: filter_disclosable(timeline, relation),
            evidence: filter_disclosable(evidence, relation),
        })
    }

    /// All complaints owned by a victim, abbreviated.
    pub async fn list_for_victim(
        &self,
        victim_id: &ActorId,
    ) -> Result<Vec<ComplaintSummary>, ComplaintError> {
        let complaints = self
            .complaints
            .find_by_victim(victim_id)
            .await
            .map_err(|err| ComplaintError::store("complaints.find_by_victim", err))?;
        Ok(self.summarize(complaints))
    }

    /// All complaints assigned to a station, abbreviated.
    pub async fn list_for_station(
        &self,
        station_id: &StationId,
    ) -> Result<Vec<ComplaintSummary>, ComplaintError> {
        let complaints = self
            .complaints
            .find_by_station(station_id)
            .await
            .map_err(|err| ComplaintError::store("complaints.find_by_station", err))?;
        Ok(self.summarize(complaints))
    }

    fn summarize(&self, complaints: Vec<Complaint>) -> Vec<ComplaintSummary> {
        complaints
            .into_iter()
            .take(self.config.list_page_cap)
            .map(ComplaintSummary::from)
            .collect()
    }
}
