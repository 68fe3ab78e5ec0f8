//! # Value Objects
//!
//! Immutable domain primitives for machine operations. The foundation types
//! live in `vendo-types`; this module re-exports them alongside the wei
//! amount type so domain code has a single import point.

pub use vendo_types::{AccountId, LowStockNotice, Timestamp};

// Re-export U256 from primitive-types for wei arithmetic
pub use primitive_types::U256;

/// Converts a whole-wei `u64` into a `U256` amount.
#[must_use]
pub fn wei(amount: u64) -> U256 {
    U256::from(amount)
}

// =============================================================================
// TESTS
// =============================================================================
