//! # Integration Tests
//!
//! Cross-crate tests driving the machine through its service API: the full
//! upgrade lifecycle, invariants under randomized operation, and notice
//! delivery through the event bus.

pub mod event_flow;
pub mod upgrade_lifecycle;
