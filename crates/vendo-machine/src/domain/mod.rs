//! # Domain Layer
//!
//! The persistent state record, immutable value objects, and the runtime
//! invariants every completed operation must preserve.

pub mod entities;
pub mod invariants;
pub mod value_objects;
