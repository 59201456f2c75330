//! Infrastructure Layer
//!
//! Concrete implementations of the domain repository contracts.

pub mod storage;
