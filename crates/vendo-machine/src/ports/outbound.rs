//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the machine core depends on. Adapters implement these to
//! provide wall-clock time and the transfer leg of withdrawals; tests
//! substitute deterministic versions.

use crate::domain::value_objects::{AccountId, Timestamp, U256};
use crate::errors::PayoutError;

// =============================================================================
// TIME SOURCE
// =============================================================================

/// Interface for reading the current time.
///
/// Withdrawal cooldowns are decided against this clock. The core never
/// reads the system clock directly, which is what makes the cooldown
/// testable without sleeping.
pub trait TimeSource: Send + Sync {
    /// The current time.
    fn now(&self) -> Timestamp;
}

// =============================================================================
// PAYOUT SINK
// =============================================================================

/// Interface for crediting withdrawn profit to an account.
///
/// The sink is invoked before the record is mutated: a rejected credit
/// aborts the withdrawal with no state change.
pub trait PayoutSink: Send + Sync {
    /// Credit `amount` to `to`.
    fn credit(&self, to: AccountId, amount: U256) -> Result<(), PayoutError>;
}
