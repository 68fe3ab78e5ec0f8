//! # Error Types
//!
//! All error types for machine operations. Every failure aborts the
//! operation with no state mutation and surfaces verbatim to the caller;
//! there is no retry or recovery path inside the core.

use crate::versions::LogicVersion;
use thiserror::Error;
use vendo_types::{AccountId, U256};

// =============================================================================
// MACHINE ERRORS
// =============================================================================

/// Errors that can occur during machine operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// Caller is not the machine owner.
    #[error("unauthorized: caller {caller} is not the owner")]
    Unauthorized {
        /// The rejected caller.
        caller: AccountId,
    },

    /// Purchase cannot be satisfied from current inventory.
    #[error("out of stock: requested {requested}, available {available}")]
    OutOfStock {
        /// Units the purchase would dispense.
        requested: u64,
        /// Units currently available.
        available: u64,
    },

    /// Payment buys zero whole units at the current unit price.
    #[error("payment {payment} buys zero units at price {unit_price}")]
    ZeroUnits {
        /// The payment offered.
        payment: U256,
        /// The fixed unit price.
        unit_price: U256,
    },

    /// Withdrawal attempted with zero balance (guarded from v4 on).
    #[error("Profits must be greater than 0 in order to withdraw!")]
    InsufficientProfit,

    /// Withdrawal cooldown has not elapsed.
    #[error("Withdrawal allowed once a week")]
    WithdrawalTooSoon {
        /// Seconds since the last successful withdrawal.
        elapsed: u64,
        /// Seconds the cooldown requires.
        required: u64,
    },

    /// Restock amount must be positive.
    #[error("restock amount must be greater than 0")]
    ZeroRestock,

    /// Unstructured arithmetic fault (underflow or overflow).
    ///
    /// v3's withdrawal surfaces this instead of a descriptive error: its
    /// balance "guard" is a subtraction that underflows on a zero balance.
    #[error("arithmetic underflow or overflow")]
    Arithmetic,

    /// Operation does not exist in the active logic version.
    #[error("operation '{operation}' does not exist in {version}")]
    Unsupported {
        /// The operation name.
        operation: &'static str,
        /// The active logic version.
        version: LogicVersion,
    },

    /// Target version's field layout is not an append-only extension of
    /// the active version's.
    #[error("incompatible layout: {from} -> {to} is not an append-only extension")]
    IncompatibleLayout {
        /// The active version.
        from: LogicVersion,
        /// The rejected target version.
        to: LogicVersion,
    },

    /// Payout sink failure.
    #[error("payout error: {0}")]
    Payout(#[from] PayoutError),
}

impl MachineError {
    /// Returns true if this error carries a designed, descriptive meaning
    /// (everything except the unstructured arithmetic fault).
    #[must_use]
    pub fn is_descriptive(&self) -> bool {
        !matches!(self, Self::Arithmetic)
    }

    /// Returns true if this is an authorization failure.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

// =============================================================================
// PAYOUT ERRORS
// =============================================================================

/// Errors from the payout sink (the transfer leg of withdrawal).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayoutError {
    /// The sink rejected the credit.
    #[error("payout rejected: {0}")]
    Rejected(String),

    /// The sink is unreachable.
    #[error("payout sink unavailable")]
    Unavailable,
}

// =============================================================================
// TESTS
// =============================================================================
