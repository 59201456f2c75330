//! Storage backends.
//!
//! The in-memory stores are the reference implementation and the default
//! wiring for tests. Durable backends (a relational record store, a
//! document log) plug in behind the same repository traits.

pub mod memory;

pub use memory::{InMemoryComplaintStore, InMemoryEvidenceStore, InMemoryTimelineStore};
