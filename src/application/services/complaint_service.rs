//! Complaint operation facade.
//!
//! The surface a thin HTTP or CLI boundary wraps. Owns the wiring of the
//! transition engine, the aggregator, and the append paths for narrative
//! and evidence. Ownership and authorship are always forced from the
//! authenticated actor, never taken from the payload.

use std::sync::Arc;
use tracing::info;

use crate::application::guard::AuthorizationGuard;
use crate::application::services::case_aggregator::{CaseAggregator, CaseView, ComplaintSummary};
use crate::application::services::transition_engine::StatusTransitionEngine;
use crate::config::EngineConfig;
use crate::domain::entities::{
    AuthorRole, Category, Complaint, EvidenceItem, EvidenceKind, Severity, TimelineEntry,
};
use crate::domain::repositories::{
    DynComplaintRepository, DynEvidenceRepository, DynTimelineRepository,
};
use crate::domain::value_objects::{Actor, ActorId, ComplaintId, ComplaintStatus, StationId, Visibility};
use crate::errors::ComplaintError;

/// Payload for filing a complaint. The victim id never appears here; it is
/// taken from the authenticated actor.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub incident_location: String,
    pub category: Category,
    pub severity: Severity,
    pub station_id: StationId,
}

/// Payload for attaching evidence.
#[derive(Debug, Clone)]
pub struct NewEvidence {
    pub kind: EvidenceKind,
    pub file_ref: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// The exposed operation surface of the complaint engine.
pub struct ComplaintService {
    complaints: DynComplaintRepository,
    timeline: DynTimelineRepository,
    evidence: DynEvidenceRepository,
    guard: AuthorizationGuard,
    engine: StatusTransitionEngine,
    aggregator: CaseAggregator,
}

impl ComplaintService {
    pub fn new(
        complaints: DynComplaintRepository,
        timeline: DynTimelineRepository,
        evidence: DynEvidenceRepository,
        config: EngineConfig,
    ) -> Self {
        let engine = StatusTransitionEngine::new(
            Arc::clone(&complaints),
            Arc::clone(&timeline),
            config.clone(),
        );
        let aggregator = CaseAggregator::new(
            Arc::clone(&complaints),
            Arc::clone(&timeline),
            Arc::clone(&evidence),
            config,
        );
        Self {
            complaints,
            timeline,
            evidence,
            guard: AuthorizationGuard::new(),
            engine,
            aggregator,
        }
    }

    /// File a new complaint. The actor must be a victim; the complaint is
    /// owned by them and starts `Pending`. The timeline document is seeded
    /// immediately so narrative appends always find their parent.
    pub async fn create_complaint(
        &self,
        actor: &Actor,
        payload: NewComplaint,
    ) -> Result<Complaint, ComplaintError> {
        self.guard.can_file(actor)?;
        require_text("title", &payload.title)?;
        require_text("description", &payload.description)?;
        require_text("incident_location", &payload.incident_location)?;

        let complaint = Complaint::new(
            actor.id.clone(),
            payload.station_id,
            payload.title,
            payload.description,
            payload.incident_location,
            payload.category,
            payload.severity,
        );

        self.complaints
            .insert(&complaint)
            .await
            .map_err(|err| ComplaintError::store("complaints.insert", err))?;
        self.timeline
            .create_if_absent(&complaint.id)
            .await
            .map_err(|err| ComplaintError::store("timeline.create_if_absent", err))?;

        info!(complaint = %complaint.id, station = %complaint.station_id, "complaint filed");
        Ok(complaint)
    }

    /// The unified, visibility-filtered case view.
    pub async fn get_case(
        &self,
        id: &ComplaintId,
        viewer: &Actor,
    ) -> Result<CaseView, ComplaintError> {
        self.aggregator.get_case(id, viewer).await
    }

    pub async fn list_for_victim(
        &self,
        victim_id: &ActorId,
    ) -> Result<Vec<ComplaintSummary>, ComplaintError> {
        self.aggregator.list_for_victim(victim_id).await
    }

    pub async fn list_for_station(
        &self,
        station_id: &StationId,
    ) -> Result<Vec<ComplaintSummary>, ComplaintError> {
        self.aggregator.list_for_station(station_id).await
    }

    /// Move a complaint to a new lifecycle status.
    pub async fn transition_status(
        &self,
        id: &ComplaintId,
        actor: &Actor,
        to: ComplaintStatus,
        remarks: &str,
    ) -> Result<Complaint, ComplaintError> {
        self.engine.transition(id, actor, to, remarks).await
    }

    /// Append a narrative note. Open to the owning victim and station
    /// officers; the author role and id on the entry come from the actor.
    pub async fn add_narrative_entry(
        &self,
        id: &ComplaintId,
        actor: &Actor,
        text: &str,
        visibility: Option<Visibility>,
    ) -> Result<TimelineEntry, ComplaintError> {
        require_text("text", text)?;
        let complaint = self
            .complaints
            .find_by_id(id)
            .await
            .map_err(|err| ComplaintError::store("complaints.find_by_id", err))?
            .ok_or_else(|| ComplaintError::not_found(id))?;
        self.guard.can_add_narrative(actor, &complaint)?;

        let entry = TimelineEntry::authored(
            id.clone(),
            text.trim().to_string(),
            AuthorRole::from(&actor.role),
            actor.id.clone(),
            visibility.unwrap_or(complaint.default_visibility),
        );
        self.timeline
            .append(&entry)
            .await
            .map_err(|err| ComplaintError::store("timeline.append", err))?;
        Ok(entry)
    }

    /// Attach evidence to a case. Station officers only; items default to
    /// `Private` disclosure.
    pub async fn add_evidence(
        &self,
        id: &ComplaintId,
        actor: &Actor,
        payload: NewEvidence,
    ) -> Result<EvidenceItem, ComplaintError> {
        require_text("file_ref", &payload.file_ref)?;
        let complaint = self
            .complaints
            .find_by_id(id)
            .await
            .map_err(|err| ComplaintError::store("complaints.find_by_id", err))?
            .ok_or_else(|| ComplaintError::not_found(id))?;
        self.guard.can_add_evidence(actor, &complaint)?;

        let item = EvidenceItem::new(
            id.clone(),
            payload.kind,
            payload.file_ref,
            payload.description,
            actor.id.clone(),
            payload.tags,
        );
        self.evidence
            .append(&item)
            .await
            .map_err(|err| ComplaintError::store("evidence.append", err))?;

        info!(complaint = %id, officer = %actor.id, "evidence attached");
        Ok(item)
    }

    /// Assign an officer to work the case.
    pub async fn assign_officer(
        &self,
        id: &ComplaintId,
        actor: &Actor,
        officer_id: ActorId,
    ) -> Result<Complaint, ComplaintError> {
        self.engine.assign(id, actor, officer_id).await
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ComplaintError> {
    if value.trim().is_empty() {
        Err(ComplaintError::validation(field, "must not be empty"))
    } else {
        Ok(())
    }
}
