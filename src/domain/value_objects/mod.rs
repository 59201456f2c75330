//! Value Objects
//!
//! Immutable value objects that represent domain concepts.

pub mod actor;
pub mod ids;
pub mod status;
pub mod visibility;

pub use actor::{Actor, ActorRole};
pub use ids::{ActorId, ComplaintId, StationId};
pub use status::ComplaintStatus;
pub use visibility::{filter_disclosable, CaseViewer, Disclosable, Visibility};
