//! # Vendo Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── upgrade_lifecycle.rs   # v1 -> v2 -> v3 -> v4 upgrade chain
//!     ├── machine_properties.rs  # Invariants under randomized operation
//!     └── event_flow.rs          # Low-stock notices through the bus
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p vendo-tests
//!
//! # By category
//! cargo test -p vendo-tests integration::upgrade_lifecycle::
//! cargo test -p vendo-tests integration::machine_properties::
//! cargo test -p vendo-tests integration::event_flow::
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
