//! Complaint Lifecycle & Dual-Store Consistency Engine
//!
//! Tracks citizen-filed complaints through a police-case lifecycle. The case
//! of record (complaint metadata, status history) lives in a structured
//! record store; the unbounded case narrative (timeline entries, evidence)
//! lives in an append-only document store. This crate keeps the two in
//! agreement: the status state machine, the transactional write protocol,
//! the read-side aggregation that composes a unified case view, and the
//! visibility filter applied to narrative entries and evidence.
//!
//! Identity verification, HTTP routing, and process bootstrap are external
//! collaborators. Callers hand the engine an already-authenticated [`Actor`]
//! and validated payloads.

pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;

pub use application::guard::AuthorizationGuard;
pub use application::services::case_aggregator::{CaseAggregator, CaseView, ComplaintSummary};
pub use application::services::complaint_service::{ComplaintService, NewComplaint, NewEvidence};
pub use application::services::transition_engine::StatusTransitionEngine;
pub use config::EngineConfig;
pub use domain::entities::{
    AuthorRole, Category, Complaint, EvidenceItem, EvidenceKind, Severity, StatusHistoryEntry,
    TimelineEntry,
};
pub use domain::value_objects::{
    Actor, ActorId, ActorRole, CaseViewer, ComplaintId, ComplaintStatus, StationId, Visibility,
};
pub use errors::ComplaintError;
