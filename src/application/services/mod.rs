//! Application Services
//!
//! The transition engine (write path for status), the case aggregator
//! (read path), and the facade that exposes the operation surface.

pub mod case_aggregator;
pub mod complaint_service;
pub mod transition_engine;

pub use case_aggregator::{CaseAggregator, CaseView, ComplaintSummary};
pub use complaint_service::{ComplaintService, NewComplaint, NewEvidence};
pub use transition_engine::StatusTransitionEngine;
