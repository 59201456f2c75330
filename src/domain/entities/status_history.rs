//! Status history entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActorId, ComplaintId, ComplaintStatus};

/// One row of the authoritative status audit trail. Append-only; never
/// updated or deleted. For every status a complaint has ever held exactly
/// one entry exists, in transition order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub complaint_id: ComplaintId,

    /// The status the complaint moved to
    pub status: ComplaintStatus,

    /// Officer who applied the transition
    pub updated_by_officer_id: ActorId,

    /// Officer's remarks accompanying the change
    pub remarks: String,

    pub recorded_at: DateTime<Utc>,
}

impl StatusHistoryEntry {
    pub fn new(
        complaint_id: ComplaintId,
        status: ComplaintStatus,
        updated_by_officer_id: ActorId,
        remarks: String,
    ) -> Self {
        Self { complaint_id, status, updated_by_officer_id, remarks, recorded_at: Utc::now() }
    }

    /// Whether this entry records the given transition outcome.
    #[must_use]
    pub fn records(&self, status: ComplaintStatus, remarks: &str) -> bool {
        self.status == status && self.remarks == remarks
    }
}
