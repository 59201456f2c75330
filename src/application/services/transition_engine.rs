//! Status Transition Engine
//!
//! The only writer of `current_status` and the sole author of system
//! narrative entries. A transition is three effects treated as one logical
//! unit: the authoritative status write, the status-history row, and a
//! system timeline note. The status write is compare-and-swap and comes
//! first; history and note are projections of it, re-applied with bounded
//! retries and never rolled back. Identical resubmissions after a partial
//! failure converge the projections instead of duplicating them.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::application::guard::AuthorizationGuard;
use crate::config::EngineConfig;
use crate::domain::entities::{Complaint, StatusHistoryEntry, TimelineEntry};
use crate::domain::repositories::{
    DynComplaintRepository, DynTimelineRepository, RepositoryError,
};
use crate::domain::value_objects::{Actor, ActorId, ComplaintId, ComplaintStatus};
use crate::errors::ComplaintError;

/// Per-case mutual exclusion. Scoped strictly to the write critical
/// section; readers never take these locks.
#[derive(Default)]
struct CaseLocks {
    inner: RwLock<HashMap<ComplaintId, Arc<Mutex<()>>>>,
}

impl CaseLocks {
    async fn acquire(&self, id: &ComplaintId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.write().await;
            map.entry(id.clone()).or_insert_with(|| Arc::new(Mutex::new(()))).clone()
        };
        lock.lock_owned().await
    }
}

/// The last transition applied to a case, for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AppliedTransition {
    status: ComplaintStatus,
    remarks: String,
}

/// Validates and applies status changes, keeping record and narrative in
/// agreement.
pub struct StatusTransitionEngine {
    complaints: DynComplaintRepository,
    timeline: DynTimelineRepository,
    guard: AuthorizationGuard,
    config: EngineConfig,
    locks: CaseLocks,
    last_applied: RwLock<HashMap<ComplaintId, AppliedTransition>>,
}

impl StatusTransitionEngine {
    pub fn new(
        complaints: DynComplaintRepository,
        timeline: DynTimelineRepository,
        config: EngineConfig,
    ) -> Self {
        Self {
            complaints,
            timeline,
            guard: AuthorizationGuard::new(),
            config,
            locks: CaseLocks::default(),
            last_applied: RwLock::new(HashMap::new()),
        }
    }

    /// Move a complaint to a new status.
    ///
    /// The actor must be an officer of the complaint's station and the
    /// target status a legal successor of the current one. On success the
    /// case carries one new history row and one new system timeline note.
    pub async fn transition(
        &self,
        id: &ComplaintId,
        actor: &Actor,
        to: ComplaintStatus,
        remarks: &str,
    ) -> Result<Complaint, ComplaintError> {
        let remarks = remarks.trim();
        if remarks.is_empty() {
            return Err(ComplaintError::validation("remarks", "must not be empty"));
        }

        let complaint = self.fetch(id).await?;
        self.guard.can_transition(actor, &complaint)?;

        let _serial = self.locks.acquire(id).await;
        // State may have moved while we waited for the lock.
        let complaint = self.fetch(id).await?;

        if self.is_duplicate(&complaint, to, remarks).await? {
            self.converge(&complaint, to, remarks, &actor.id).await?;
            return Ok(complaint);
        }

        let from = complaint.current_status;
        if !from.can_transition_to(to) {
            return Err(ComplaintError::InvalidTransition {
                from,
                to,
                allowed: from.successors().to_vec(),
            });
        }

        // Step one: the authoritative status write. Nothing has happened
        // until this lands, so failures here leave the case untouched.
        let updated = self.complaints.update_status(id, from, to).await.map_err(|err| match err {
            RepositoryError::NotFound => ComplaintError::not_found(id),
            // Conflict under the case lock means an out-of-band writer won
            // the race; the caller can retry against the fresh state.
            other => ComplaintError::store("complaints.update_status", other),
        })?;

        self.remember(id, to, remarks).await;

        // Steps two and three: projections of the applied status.
        self.project(&updated, to, remarks, &actor.id).await?;

        info!(complaint = %id, %from, %to, "status transition applied");
        Ok(updated)
    }

    /// Assign an officer to the case and note it on the timeline. Not a
    /// status change: no history row is produced.
    pub async fn assign(
        &self,
        id: &ComplaintId,
        actor: &Actor,
        officer_id: ActorId,
    ) -> Result<Complaint, ComplaintError> {
        let complaint = self.fetch(id).await?;
        self.guard.can_assign(actor, &complaint)?;

        let _serial = self.locks.acquire(id).await;
        let updated =
            self.complaints.assign_officer(id, &officer_id).await.map_err(|err| match err {
                RepositoryError::NotFound => ComplaintError::not_found(id),
                other => ComplaintError::store("complaints.assign_officer", other),
            })?;

        let note = TimelineEntry::system(
            id.clone(),
            format!("Case assigned to officer {officer_id}"),
            actor.id.clone(),
        );
        self.timeline
            .append(&note)
            .await
            .map_err(|err| ComplaintError::store("timeline.append", err))?;

        info!(complaint = %id, officer = %officer_id, "officer assigned");
        Ok(updated)
    }

    fn status_note(to: ComplaintStatus, remarks: &str) -> String {
        format!("Status changed to {to}: {remarks}")
    }

    async fn fetch(&self, id: &ComplaintId) -> Result<Complaint, ComplaintError> {
        self.complaints
            .find_by_id(id)
            .await
            .map_err(|err| ComplaintError::store("complaints.find_by_id", err))?
            .ok_or_else(|| ComplaintError::not_found(id))
    }

    async fn remember(&self, id: &ComplaintId, to: ComplaintStatus, remarks: &str) {
        let mut map = self.last_applied.write().await;
        map.insert(id.clone(), AppliedTransition { status: to, remarks: remarks.to_string() });
    }

    /// A resubmission of the transition that already produced the current
    /// status. Recognized via the engine's last-applied record, with the
    /// history tail as fallback so retries survive an engine restart.
    async fn is_duplicate(
        &self,
        complaint: &Complaint,
        to: ComplaintStatus,
        remarks: &str,
    ) -> Result<bool, ComplaintError> {
        if complaint.current_status != to {
            return Ok(false);
        }
        if let Some(applied) = self.last_applied.read().await.get(&complaint.id) {
            if applied.status == to && applied.remarks == remarks {
                return Ok(true);
            }
        }
        let history = self
            .complaints
            .history_for(&complaint.id)
            .await
            .map_err(|err| ComplaintError::store("complaints.history_for", err))?;
        Ok(history.last().is_some_and(|entry| entry.records(to, remarks)))
    }

    /// Re-apply whichever projections a partially failed transition left
    /// missing. Counts are compared so repeated remarks on distinct
    /// transitions are not mistaken for an already-written note.
    async fn converge(
        &self,
        complaint: &Complaint,
        to: ComplaintStatus,
        remarks: &str,
        officer: &ActorId,
    ) -> Result<(), ComplaintError> {
        let history = self
            .complaints
            .history_for(&complaint.id)
            .await
            .map_err(|err| ComplaintError::store("complaints.history_for", err))?;
        if !history.last().is_some_and(|entry| entry.records(to, remarks)) {
            let entry =
                StatusHistoryEntry::new(complaint.id.clone(), to, officer.clone(), remarks.to_string());
            self.complaints
                .append_history(&entry)
                .await
                .map_err(|err| ComplaintError::store("complaints.append_history", err))?;
        }

        let note_text = Self::status_note(to, remarks);
        let recorded = history.iter().filter(|entry| entry.records(to, remarks)).count().max(1);
        let entries = self
            .timeline
            .entries_for(&complaint.id)
            .await
            .map_err(|err| ComplaintError::store("timeline.entries_for", err))?;
        let noted = entries.iter().filter(|e| e.is_system() && e.text == note_text).count();
        if noted < recorded {
            let note = TimelineEntry::system(complaint.id.clone(), note_text, officer.clone());
            self.timeline
                .append(&note)
                .await
                .map_err(|err| ComplaintError::store("timeline.append", err))?;
        }

        info!(complaint = %complaint.id, status = %to, "duplicate resubmission converged");
        Ok(())
    }

    /// Append the history row and the system note for an applied status,
    /// retrying the remaining steps against the new baseline. Exhaustion is
    /// logged with enough context for manual reconciliation and surfaced as
    /// retryable; a resubmission then converges via the duplicate path.
    async fn project(
        &self,
        complaint: &Complaint,
        to: ComplaintStatus,
        remarks: &str,
        officer: &ActorId,
    ) -> Result<(), ComplaintError> {
        let entry =
            StatusHistoryEntry::new(complaint.id.clone(), to, officer.clone(), remarks.to_string());
        let note =
            TimelineEntry::system(complaint.id.clone(), Self::status_note(to, remarks), officer.clone());

        let mut history_done = false;
        let mut last_failure: Option<(&'static str, RepositoryError)> = None;

        for attempt in 0..self.config.projection_retry_attempts {
            if attempt > 0 {
                sleep(self.config.projection_backoff()).await;
            }

            if !history_done {
                match self.complaints.append_history(&entry).await {
                    Ok(()) => history_done = true,
                    Err(err) => {
                        warn!(
                            complaint = %complaint.id,
                            status = %to,
                            step = "history",
                            attempt,
                            error = %err,
                            "projection step failed"
                        );
                        last_failure = Some(("complaints.append_history", err));
                        continue;
                    }
                }
            }

            match self.timeline.append(&note).await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    warn!(
                        complaint = %complaint.id,
                        status = %to,
                        step = "timeline",
                        attempt,
                        error = %err,
                        "projection step failed"
                    );
                    last_failure = Some(("timeline.append", err));
                }
            }
        }

        let (operation, source) = last_failure.unwrap_or((
            "projection",
            RepositoryError::Unavailable("no attempts were made".to_string()),
        ));
        error!(
            complaint = %complaint.id,
            status = %to,
            step = operation,
            "projection retries exhausted; status is applied, narrative needs reconciliation"
        );
        Err(ComplaintError::store(operation, source))
    }
}
