//! Evidence store interface.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::EvidenceItem;
use crate::domain::value_objects::ComplaintId;

/// Contract for the append-only evidence collection.
#[async_trait]
pub trait EvidenceRepository: Send + Sync {
    /// Attach one evidence item to a complaint.
    async fn append(&self, item: &EvidenceItem) -> Result<(), RepositoryError>;

    /// All evidence for a complaint, oldest first.
    async fn items_for(&self, id: &ComplaintId) -> Result<Vec<EvidenceItem>, RepositoryError>;
}
