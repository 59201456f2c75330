//! Complaint lifecycle status.
//!
//! The transition table is fixed: PENDING -> {INVESTIGATION, CLOSED},
//! INVESTIGATION -> {RESOLVED, CLOSED}, RESOLVED -> {INVESTIGATION, CLOSED},
//! CLOSED -> nothing. A resolved case may reopen; a closed case is final.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a complaint. Every new complaint starts `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Pending,
    Investigation,
    Resolved,
    Closed,
}

impl ComplaintStatus {
    /// Legal successor states for this status.
    #[must_use]
    pub fn successors(self) -> &'static [ComplaintStatus] {
        match self {
            Self::Pending => &[Self::Investigation, Self::Closed],
            Self::Investigation => &[Self::Resolved, Self::Closed],
            Self::Resolved => &[Self::Investigation, Self::Closed],
            Self::Closed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, to: ComplaintStatus) -> bool {
        self.successors().contains(&to)
    }

    /// A terminal status admits no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }

    pub const ALL: [ComplaintStatus; 4] =
        [Self::Pending, Self::Investigation, Self::Resolved, Self::Closed];
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "PENDING",
            Self::Investigation => "INVESTIGATION",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        };
        write!(f, "{name}")
    }
}
