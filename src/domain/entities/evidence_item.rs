//! Evidence item entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActorId, ComplaintId, Disclosable, Visibility};

/// Kind of evidence attached to a case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceKind {
    Image,
    Video,
    Document,
}

/// A piece of evidence attached to a complaint. Append-only, uploaded by
/// station officers, private unless an officer widens disclosure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub complaint_id: ComplaintId,

    pub kind: EvidenceKind,

    /// Location of the stored artifact (object store key, URL)
    pub file_ref: String,

    pub description: String,

    pub uploaded_by_officer_id: ActorId,

    pub uploaded_at: DateTime<Utc>,

    /// Who may see this item. Defaults to `Private`.
    pub visibility: Visibility,

    /// Free-form labels for search and triage
    pub tags: Vec<String>,
}

impl EvidenceItem {
    pub fn new(
        complaint_id: ComplaintId,
        kind: EvidenceKind,
        file_ref: String,
        description: String,
        uploaded_by_officer_id: ActorId,
        tags: Vec<String>,
    ) -> Self {
        Self {
            complaint_id,
            kind,
            file_ref,
            description,
            uploaded_by_officer_id,
            uploaded_at: Utc::now(),
            visibility: Visibility::Private,
            tags,
        }
    }
}

impl Disclosable for EvidenceItem {
    fn visibility(&self) -> Visibility {
        self.visibility
    }
}
