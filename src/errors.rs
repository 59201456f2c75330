//! Service error taxonomy.
//!
//! Every operation on the engine surfaces one of these variants. Only
//! `StoreUnavailable` is retryable by the caller; everything else is a
//! terminal verdict on the request as submitted.

use thiserror::Error;

use crate::domain::repositories::RepositoryError;
use crate::domain::value_objects::{ComplaintId, ComplaintStatus};

/// Errors surfaced by the complaint engine.
#[derive(Debug, Error)]
pub enum ComplaintError {
    /// The referenced complaint does not exist. Checked before any
    /// authorization verdict so that unknown ids never leak existence.
    #[error("complaint {id} not found")]
    NotFound { id: ComplaintId },

    /// The actor is not allowed to perform the operation.
    #[error("forbidden: {reason}")]
    Forbidden { reason: String },

    /// The requested status is not a legal successor of the current one.
    /// Carries the allowed successor set for caller feedback.
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: ComplaintStatus,
        to: ComplaintStatus,
        allowed: Vec<ComplaintStatus>,
    },

    /// Malformed input, e.g. empty remarks on a transition.
    #[error("validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A backing store failed or timed out. Retryable with backoff.
    #[error("store unavailable during {operation}")]
    StoreUnavailable {
        operation: String,
        #[source]
        source: RepositoryError,
    },
}

impl ComplaintError {
    pub fn not_found(id: &ComplaintId) -> Self {
        Self::NotFound { id: id.clone() }
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden { reason: reason.into() }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), reason: reason.into() }
    }

    /// Tag a repository failure with the operation that hit it.
    pub fn store(operation: impl Into<String>, source: RepositoryError) -> Self {
        Self::StoreUnavailable { operation: operation.into(), source }
    }

    /// Whether the caller may retry the same request with backoff.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_store_failures_are_retryable() {
        let unavailable = ComplaintError::store(
            "timeline.append",
            RepositoryError::Unavailable("timed out".to_string()),
        );
        assert!(unavailable.is_retryable());

        assert!(!ComplaintError::forbidden("station mismatch").is_retryable());
        assert!(!ComplaintError::validation("remarks", "must not be empty").is_retryable());
    }

    #[test]
    fn invalid_transition_reports_both_ends() {
        let err = ComplaintError::InvalidTransition {
            from: ComplaintStatus::Closed,
            to: ComplaintStatus::Pending,
            allowed: vec![],
        };
        let msg = err.to_string();
        assert!(msg.contains("CLOSED"));
        assert!(msg.contains("PENDING"));
    }
}
