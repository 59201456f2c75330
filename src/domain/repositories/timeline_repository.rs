//! Case timeline store interface.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::TimelineEntry;
use crate::domain::value_objects::ComplaintId;

/// Contract for the append-only narrative log.
///
/// The store keys one document per complaint. Order exposed to readers is
/// insertion order, not any client-supplied timestamp.
#[async_trait]
pub trait TimelineRepository: Send + Sync {
    /// Seed an empty timeline document for a new complaint. Succeeds
    /// silently if one already exists.
    async fn create_if_absent(&self, id: &ComplaintId) -> Result<(), RepositoryError>;

    /// Append one entry to the complaint's timeline.
    async fn append(&self, entry: &TimelineEntry) -> Result<(), RepositoryError>;

    /// All entries for a complaint, oldest first.
    async fn entries_for(&self, id: &ComplaintId) -> Result<Vec<TimelineEntry>, RepositoryError>;
}
