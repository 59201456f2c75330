//! Timeline entry entity.
//!
//! An append-only note in a complaint's narrative. Entries are ordered by
//! insertion within a case, never edited or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActorId, ActorRole, ComplaintId, Disclosable, Visibility};

/// Who authored a narrative entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorRole {
    Police,
    Victim,
    /// Entries the engine itself writes, e.g. status-change notes.
    System,
}

impl From<&ActorRole> for AuthorRole {
    fn from(role: &ActorRole) -> Self {
        match role {
            ActorRole::Victim => Self::Victim,
            ActorRole::Officer { .. } => Self::Police,
        }
    }
}

/// A single note in a complaint's narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub complaint_id: ComplaintId,

    /// The note itself
    pub text: String,

    pub author_role: AuthorRole,

    /// Identifier of the authoring actor. System entries carry the id of
    /// the officer whose action produced them.
    pub author_id: ActorId,

    /// Display name of the author, when the boundary layer supplies one
    pub author_name: Option<String>,

    pub recorded_at: DateTime<Utc>,

    /// Who may see this entry
    pub visibility: Visibility,
}

impl TimelineEntry {
    /// A note written by a victim or an officer.
    pub fn authored(
        complaint_id: ComplaintId,
        text: String,
        author_role: AuthorRole,
        author_id: ActorId,
        visibility: Visibility,
    ) -> Self {
        Self {
            complaint_id,
            text,
            author_role,
            author_id,
            author_name: None,
            recorded_at: Utc::now(),
            visibility,
        }
    }

    /// A note written by the engine itself. System notes are disclosed to
    /// the victim so the case owner can follow the lifecycle.
    pub fn system(complaint_id: ComplaintId, text: String, acting_officer: ActorId) -> Self {
        Self {
            complaint_id,
            text,
            author_role: AuthorRole::System,
            author_id: acting_officer,
            author_name: None,
            recorded_at: Utc::now(),
            visibility: Visibility::Victim,
        }
    }

    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn is_system(&self) -> bool {
        self.author_role == AuthorRole::System
    }
}

impl Disclosable for TimelineEntry {
    fn visibility(&self) -> Visibility {
        self.visibility
    }
}
