//! # Core Domain Entities
//!
//! The persistent state record shared by every logic version, and the
//! receipts operations return on success.

use crate::domain::invariants::params;
use crate::domain::value_objects::{AccountId, LowStockNotice, Timestamp, U256};
use crate::errors::MachineError;
use serde::{Deserialize, Serialize};

// =============================================================================
// STATE RECORD
// =============================================================================

/// The one persistent record every logic version operates on.
///
/// Created exactly once, never destroyed. Upgrades rebind which logic
/// version interprets the record; they never touch its contents. Schema
/// evolution is strictly append-only: later versions extend the field list,
/// never remove, reorder, or retype existing fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    /// Units available for purchase. Never negative.
    pub inventory: u64,
    /// Wei required per unit. Fixed at initialization; no version ships a
    /// reconfiguration operation.
    pub unit_price: U256,
    /// Cumulative payments received minus cumulative withdrawals.
    pub profit: U256,
    /// Sole principal authorized to withdraw, restock, and upgrade.
    /// Set once at creation, never reassigned.
    pub owner: AccountId,
    /// Time of the last successful withdrawal. Zero means "never"; that
    /// default is what lets a first withdrawal pass the cooldown trivially.
    pub last_withdrawal_time: Timestamp,
    /// Inventory level at or below which low-stock notices are emitted.
    /// Fixed constant, not externally configurable.
    pub low_stock_threshold: u64,
}

impl StateRecord {
    /// Creates the record at first deployment.
    ///
    /// Only `inventory` and `owner` vary per deployment; price and
    /// threshold are the machine constants.
    #[must_use]
    pub fn initialize(inventory: u64, owner: AccountId) -> Self {
        Self {
            inventory,
            unit_price: U256::from(params::UNIT_PRICE_WEI),
            profit: U256::zero(),
            owner,
            last_withdrawal_time: Timestamp::ZERO,
            low_stock_threshold: params::LOW_STOCK_THRESHOLD,
        }
    }

    /// Rejects any caller that is not the owner.
    pub fn ensure_owner(&self, caller: AccountId) -> Result<(), MachineError> {
        if caller == self.owner {
            Ok(())
        } else {
            Err(MachineError::Unauthorized { caller })
        }
    }

    /// Returns true if inventory sits at or below the low-stock threshold.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.inventory <= self.low_stock_threshold
    }

    /// The low-stock notice for the current inventory level.
    #[must_use]
    pub fn low_stock_notice(&self) -> LowStockNotice {
        LowStockNotice::new(self.owner, self.inventory)
    }
}

// =============================================================================
// RECEIPTS
// =============================================================================

/// Result of a successful purchase.
///
/// Carries the notices the operation emitted so the caller can publish them
/// on the event channel; a failed operation emits nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseReceipt {
    /// Units dispensed.
    pub units: u64,
    /// Payment received (kept in full, including any remainder).
    pub payment: U256,
    /// Inventory remaining after the purchase.
    pub inventory_remaining: u64,
    /// Low-stock notices emitted by this operation.
    pub events: Vec<LowStockNotice>,
}

/// Result of a successful withdrawal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawalReceipt {
    /// Amount credited to the owner.
    pub payout: U256,
    /// Time recorded as the withdrawal time.
    pub withdrawn_at: Timestamp,
    /// Low-stock notices emitted by this operation.
    pub events: Vec<LowStockNotice>,
}

/// Result of a successful restock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestockReceipt {
    /// Units added.
    pub added: u64,
    /// Inventory after the restock.
    pub inventory: u64,
}

// =============================================================================
// TESTS
// =============================================================================
