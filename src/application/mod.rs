//! Application Layer
//!
//! Authorization checks and the services that orchestrate the domain model
//! over the injected stores.

pub mod guard;
pub mod services;
