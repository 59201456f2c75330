//! Complaint entity.
//!
//! The structured case of record a citizen files. Status is mutated only by
//! the transition engine; the assigned officer only by the assignment
//! operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Actor, ActorId, CaseViewer, ComplaintId, ComplaintStatus, StationId, Visibility,
};

/// Offense category of a complaint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Theft,
    Assault,
    Cybercrime,
    Traffic,
    General,
}

/// How urgent a complaint is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// The case of record for a citizen-filed complaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    /// Unique complaint identifier
    pub id: ComplaintId,

    /// The victim who filed the complaint and owns it
    pub victim_id: ActorId,

    /// Station the complaint is assigned to
    pub station_id: StationId,

    /// Officer assigned to work the case, if any
    pub assigned_officer_id: Option<ActorId>,

    /// Short summary line
    pub title: String,

    /// Free-text description of the incident
    pub description: String,

    /// Where the incident took place
    pub incident_location: String,

    /// Offense category
    pub category: Category,

    /// Urgency of the case
    pub severity: Severity,

    /// Current lifecycle status; authoritative over any projection
    pub current_status: ComplaintStatus,

    /// Default disclosure level for entries added to this case
    pub default_visibility: Visibility,

    /// When the complaint was filed
    pub created_at: DateTime<Utc>,
}

impl Complaint {
    /// File a new complaint. Every complaint starts `Pending`, unassigned,
    /// with a `Victim` default disclosure level.
    pub fn new(
        victim_id: ActorId,
        station_id: StationId,
        title: String,
        description: String,
        incident_location: String,
        category: Category,
        severity: Severity,
    ) -> Self {
        Self {
            id: ComplaintId::new(),
            victim_id,
            station_id,
            assigned_officer_id: None,
            title,
            description,
            incident_location,
            category,
            severity,
            current_status: ComplaintStatus::Pending,
            default_visibility: Visibility::Victim,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn is_owned_by(&self, actor_id: &ActorId) -> bool {
        &self.victim_id == actor_id
    }

    /// Relate a viewer to this case for disclosure decisions.
    #[must_use]
    pub fn viewer(&self, actor: &Actor) -> CaseViewer {
        if actor.is_officer_of(&self.station_id) {
            CaseViewer::StationOfficer
        } else if actor.is_victim() && self.is_owned_by(&actor.id) {
            CaseViewer::OwningVictim
        } else {
            CaseViewer::Other
        }
    }
}
