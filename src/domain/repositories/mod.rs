//! Repository Interfaces
//!
//! Contracts for the two backing stores: the structured record store
//! (complaint + status history) and the append-only document store
//! (timeline, evidence). Implementations are injected; the engine never
//! reaches for a global client.

use thiserror::Error;

pub mod complaint_repository;
pub mod evidence_repository;
pub mod timeline_repository;

pub use complaint_repository::ComplaintRepository;
pub use evidence_repository::EvidenceRepository;
pub use timeline_repository::TimelineRepository;

/// Repository operation errors.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("entity not found")]
    NotFound,
    #[error("entity already exists")]
    AlreadyExists,
    /// A compare-and-swap write observed a different state than expected.
    #[error("concurrent modification detected")]
    Conflict,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

// Arc aliases so services can share implementations.
pub type DynComplaintRepository = std::sync::Arc<dyn ComplaintRepository>;
pub type DynTimelineRepository = std::sync::Arc<dyn TimelineRepository>;
pub type DynEvidenceRepository = std::sync::Arc<dyn EvidenceRepository>;
