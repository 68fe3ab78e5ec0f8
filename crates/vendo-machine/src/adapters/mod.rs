//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports: clocks and payout sinks.
//! Production code uses [`clock::SystemClock`]; tests use
//! [`clock::ManualClock`] and [`treasury::InMemoryTreasury`] for
//! deterministic time and observable payouts.

pub mod clock;
pub mod treasury;

pub use clock::{ManualClock, SystemClock};
pub use treasury::InMemoryTreasury;
