//! Identifier value objects with validation.
//!
//! Identifiers are opaque strings: freshly minted ones are UUIDs, but ids
//! issued by external systems (badge registries, station directories) are
//! accepted as long as they stay within the allowed character set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

fn validate(kind: &str, id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err(format!("{kind} cannot be empty"));
    }
    if id.len() > 100 {
        return Err(format!("{kind} is too long (maximum 100 characters)"));
    }
    if Uuid::from_str(id).is_ok() {
        return Ok(());
    }
    if !id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
        return Err(format!("{kind} contains invalid characters"));
    }
    Ok(())
}

macro_rules! identifier {
    ($name:ident, $kind:literal) => {
        #[doc = concat!($kind, " identifier.")]
        #[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wrap an externally issued identifier, validating its shape.
            pub fn from_string(id: String) -> Result<Self, String> {
                validate($kind, &id)?;
                Ok(Self(id))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid.to_string())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_string(s.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

identifier!(ComplaintId, "Complaint");
identifier!(ActorId, "Actor");
identifier!(StationId, "Station");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_uuids() {
        let id = ComplaintId::new();
        assert!(Uuid::from_str(id.as_str()).is_ok());
    }

    #[test]
    fn external_ids_are_accepted() {
        assert!(ActorId::from_string("COP-001".to_string()).is_ok());
        assert!(StationId::from_string("station_12".to_string()).is_ok());
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(ComplaintId::from_string(String::new()).is_err());
        assert!(ComplaintId::from_string("a".repeat(101)).is_err());
        assert!(ComplaintId::from_string("bad id!".to_string()).is_err());
    }
}
