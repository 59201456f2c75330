//! Entry visibility and the disclosure filter.
//!
//! Narrative entries and evidence items carry a visibility tag. The filter
//! is a pure predicate over the tag and the viewer's relation to the case;
//! it decides inclusion in a response and never mutates an entry.

use serde::{Deserialize, Serialize};

/// Who may see a narrative or evidence entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Station officers only.
    Private,
    /// Station officers and the complaint's owning victim.
    Victim,
    /// Anyone who can read the case.
    Public,
}

/// A viewer's relation to a specific complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseViewer {
    /// An officer of the complaint's station.
    StationOfficer,
    /// The victim who filed the complaint.
    OwningVictim,
    /// Any other actor.
    Other,
}

impl Visibility {
    /// The disclosure rule. Station officers see everything; the owning
    /// victim sees `Victim` and `Public` entries; everyone else sees
    /// `Public` only.
    #[must_use]
    pub fn disclosable_to(self, viewer: CaseViewer) -> bool {
        match viewer {
            CaseViewer::StationOfficer => true,
            CaseViewer::OwningVictim => matches!(self, Self::Victim | Self::Public),
            CaseViewer::Other => matches!(self, Self::Public),
        }
    }
}

/// Implemented by anything carrying a visibility tag.
pub trait Disclosable {
    fn visibility(&self) -> Visibility;

    fn disclosable_to(&self, viewer: CaseViewer) -> bool {
        self.visibility().disclosable_to(viewer)
    }
}

/// Keep only the entries the viewer may see, preserving order.
pub fn filter_disclosable<T: Disclosable>(entries: Vec<T>, viewer: CaseViewer) -> Vec<T> {
    entries.into_iter().filter(|e| e.disclosable_to(viewer)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn officers_see_everything() {
        for v in [Visibility::Private, Visibility::Victim, Visibility::Public] {
            assert!(v.disclosable_to(CaseViewer::StationOfficer));
        }
    }

    #[test]
    fn victims_never_see_private() {
        assert!(!Visibility::Private.disclosable_to(CaseViewer::OwningVictim));
        assert!(Visibility::Victim.disclosable_to(CaseViewer::OwningVictim));
        assert!(Visibility::Public.disclosable_to(CaseViewer::OwningVictim));
    }

    #[test]
    fn strangers_see_public_only() {
        assert!(!Visibility::Private.disclosable_to(CaseViewer::Other));
        assert!(!Visibility::Victim.disclosable_to(CaseViewer::Other));
        assert!(Visibility::Public.disclosable_to(CaseViewer::Other));
    }
}
