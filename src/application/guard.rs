//! Authorization Guard
//!
//! Role and ownership checks gating every operation. Station officers may
//! work cases of their own station; victims may work cases they own. The
//! guard never consults a store: per-complaint operations resolve the
//! complaint first (unknown ids fail `NotFound` before any verdict here,
//! so existence is not leaked through authorization).

use tracing::warn;

use crate::domain::entities::Complaint;
use crate::domain::value_objects::{Actor, CaseViewer};
use crate::errors::ComplaintError;

/// Stateless policy over operation kind and actor role.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthorizationGuard;

impl AuthorizationGuard {
    pub fn new() -> Self {
        Self
    }

    /// Complaint creation: any authenticated victim. The stored victim id
    /// is forced to the actor's own, never client-supplied.
    pub fn can_file(&self, actor: &Actor) -> Result<(), ComplaintError> {
        if actor.is_victim() {
            Ok(())
        } else {
            self.deny(actor, "file", "only victims may file complaints")
        }
    }

    /// Reads: the owning victim or an officer of the complaint's station.
    pub fn can_view(&self, actor: &Actor, complaint: &Complaint) -> Result<(), ComplaintError> {
        match complaint.viewer(actor) {
            CaseViewer::StationOfficer | CaseViewer::OwningVictim => Ok(()),
            CaseViewer::Other => self.deny(actor, "view", "not a party to this case"),
        }
    }

    /// Status transitions: an officer of the complaint's station.
    pub fn can_transition(
        &self,
        actor: &Actor,
        complaint: &Complaint,
    ) -> Result<(), ComplaintError> {
        self.station_officer_only(actor, complaint, "transition")
    }

    /// Evidence addition: an officer of the complaint's station.
    pub fn can_add_evidence(
        &self,
        actor: &Actor,
        complaint: &Complaint,
    ) -> Result<(), ComplaintError> {
        self.station_officer_only(actor, complaint, "add_evidence")
    }

    /// Officer assignment: an officer of the complaint's station.
    pub fn can_assign(&self, actor: &Actor, complaint: &Complaint) -> Result<(), ComplaintError> {
        self.station_officer_only(actor, complaint, "assign")
    }

    /// Narrative addition: the owning victim or a station officer. The
    /// author role and id on the created entry come from the actor.
    pub fn can_add_narrative(
        &self,
        actor: &Actor,
        complaint: &Complaint,
    ) -> Result<(), ComplaintError> {
        match complaint.viewer(actor) {
            CaseViewer::StationOfficer | CaseViewer::OwningVictim => Ok(()),
            CaseViewer::Other => self.deny(actor, "add_narrative", "not a party to this case"),
        }
    }

    fn station_officer_only(
        &self,
        actor: &Actor,
        complaint: &Complaint,
        operation: &str,
    ) -> Result<(), ComplaintError> {
        if actor.is_officer_of(&complaint.station_id) {
            Ok(())
        } else if actor.is_officer() {
            self.deny(actor, operation, "officer belongs to a different station")
        } else {
            self.deny(actor, operation, "officers only")
        }
    }

    fn deny(&self, actor: &Actor, operation: &str, reason: &str) -> Result<(), ComplaintError> {
        warn!(actor = %actor.id, operation, reason, "authorization denied");
        Err(ComplaintError::forbidden(reason))
    }
}
