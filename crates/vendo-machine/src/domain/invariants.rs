//! # Domain Invariants
//!
//! Invariants that must hold at every observable state boundary, i.e. after
//! each completed operation. The checks are used by tests and by the
//! service's debug assertions; the logic modules enforce them structurally
//! by validating before their first mutation.

use crate::domain::entities::StateRecord;
use crate::domain::value_objects::{Timestamp, U256};

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Conservation: profit equals total payments received minus total
/// withdrawals, and withdrawals never exceed receipts.
#[must_use]
pub fn check_conservation_invariant(
    record: &StateRecord,
    total_received: U256,
    total_withdrawn: U256,
) -> bool {
    match total_received.checked_sub(total_withdrawn) {
        Some(expected) => record.profit == expected,
        None => false,
    }
}

/// Withdrawal time is monotonically non-decreasing once set.
#[must_use]
pub fn check_withdrawal_time_invariant(previous: Timestamp, current: Timestamp) -> bool {
    current >= previous
}

/// All-or-nothing: a failed operation leaves the record byte-identical.
#[must_use]
pub fn check_rollback_invariant(before: &StateRecord, after: &StateRecord) -> bool {
    before == after
}

/// Check all record-level invariants at once.
#[must_use]
pub fn check_all_invariants(
    record: &StateRecord,
    total_received: U256,
    total_withdrawn: U256,
    previous_withdrawal_time: Timestamp,
) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_conservation_invariant(record, total_received, total_withdrawn) {
        violations.push(InvariantViolation::ConservationBroken {
            profit: record.profit,
            received: total_received,
            withdrawn: total_withdrawn,
        });
    }

    if !check_withdrawal_time_invariant(previous_withdrawal_time, record.last_withdrawal_time) {
        violations.push(InvariantViolation::WithdrawalTimeRegressed {
            previous: previous_withdrawal_time,
            current: record.last_withdrawal_time,
        });
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Profit does not equal receipts minus withdrawals.
    ConservationBroken {
        /// Profit recorded in the state.
        profit: U256,
        /// Total payments ever received.
        received: U256,
        /// Total amounts ever withdrawn.
        withdrawn: U256,
    },
    /// Withdrawal time moved backwards.
    WithdrawalTimeRegressed {
        /// The earlier recorded time.
        previous: Timestamp,
        /// The regressed current time.
        current: Timestamp,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConservationBroken {
                profit,
                received,
                withdrawn,
            } => {
                write!(
                    f,
                    "conservation broken: profit {profit} != received {received} - withdrawn {withdrawn}"
                )
            }
            Self::WithdrawalTimeRegressed { previous, current } => {
                write!(
                    f,
                    "withdrawal time regressed: {current} earlier than {previous}"
                )
            }
        }
    }
}

// =============================================================================
// MACHINE PARAMETERS
// =============================================================================

/// Fixed machine parameters. None is externally configurable.
pub mod params {
    /// Wei required per unit.
    pub const UNIT_PRICE_WEI: u64 = 1000;

    /// Inventory level at or below which low-stock notices are emitted.
    pub const LOW_STOCK_THRESHOLD: u64 = 9;

    /// Minimum seconds between successive withdrawals.
    pub const WITHDRAWAL_COOLDOWN_SECS: u64 = vendo_types::time::ONE_WEEK_SECS;
}

// =============================================================================
// TESTS
// =============================================================================
