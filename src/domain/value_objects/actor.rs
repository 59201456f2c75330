//! Actor value object.
//!
//! One abstraction for every authenticated principal: a citizen who filed a
//! complaint or a police officer attached to a station. The identity layer
//! verifies credentials and hands the engine an `Actor`; the engine trusts
//! it and dispatches on the role tag.

use serde::{Deserialize, Serialize};

use super::ids::{ActorId, StationId};

/// Role tag carried by an authenticated actor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorRole {
    /// A citizen. Owns the complaints they filed.
    Victim,
    /// A police officer attached to a station.
    Officer { station_id: StationId },
}

/// An authenticated principal performing an operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub id: ActorId,
    pub role: ActorRole,
}

impl Actor {
    pub fn victim(id: ActorId) -> Self {
        Self { id, role: ActorRole::Victim }
    }

    pub fn officer(id: ActorId, station_id: StationId) -> Self {
        Self { id, role: ActorRole::Officer { station_id } }
    }

    #[must_use]
    pub fn is_victim(&self) -> bool {
        matches!(self.role, ActorRole::Victim)
    }

    #[must_use]
    pub fn is_officer(&self) -> bool {
        matches!(self.role, ActorRole::Officer { .. })
    }

    /// Whether this actor is an officer attached to the given station.
    #[must_use]
    pub fn is_officer_of(&self, station: &StationId) -> bool {
        match &self.role {
            ActorRole::Officer { station_id } => station_id == station,
            ActorRole::Victim => false,
        }
    }

    /// The station this actor serves, if any.
    #[must_use]
    pub fn station(&self) -> Option<&StationId> {
        match &self.role {
            ActorRole::Officer { station_id } => Some(station_id),
            ActorRole::Victim => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn officer_station_match() {
        let station = StationId::new();
        let officer = Actor::officer(ActorId::new(), station.clone());
        assert!(officer.is_officer_of(&station));
        assert!(!officer.is_officer_of(&StationId::new()));
    }

    #[test]
    fn victims_serve_no_station() {
        let victim = Actor::victim(ActorId::new());
        assert!(victim.is_victim());
        assert!(victim.station().is_none());
    }
}
