//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use complaint_service::domain::repositories::DynTimelineRepository;
use complaint_service::infrastructure::storage::{
    InMemoryComplaintStore, InMemoryEvidenceStore, InMemoryTimelineStore,
};
use complaint_service::{
    Actor, ActorId, Category, ComplaintService, EngineConfig, NewComplaint, Severity, StationId,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A service wired to fresh in-memory stores.
pub fn service() -> ComplaintService {
    service_with_timeline(Arc::new(InMemoryTimelineStore::new()), EngineConfig::default())
}

/// A service with an injected timeline store, for failure-injection tests.
pub fn service_with_timeline(
    timeline: DynTimelineRepository,
    config: EngineConfig,
) -> ComplaintService {
    init_tracing();
    ComplaintService::new(
        Arc::new(InMemoryComplaintStore::new()),
        timeline,
        Arc::new(InMemoryEvidenceStore::new()),
        config,
    )
}

pub fn victim() -> Actor {
    Actor::victim(ActorId::new())
}

pub fn officer_of(station: &StationId) -> Actor {
    Actor::officer(ActorId::new(), station.clone())
}

pub fn theft_complaint(station: &StationId) -> NewComplaint {
    NewComplaint {
        title: "Stolen bicycle".to_string(),
        description: "Bicycle taken from the yard overnight".to_string(),
        incident_location: "77 Sunset Blvd".to_string(),
        category: Category::Theft,
        severity: Severity::Medium,
        station_id: station.clone(),
    }
}
