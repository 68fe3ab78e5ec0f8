//! # Upgrade Controller
//!
//! Owns the one persistent [`StateRecord`] and the binding to the active
//! logic version. Operations delegate to the bound version's module; an
//! upgrade swaps the binding in a single assignment without touching the
//! record. State therefore survives every upgrade untouched.

use crate::domain::entities::{
    PurchaseReceipt, RestockReceipt, StateRecord, WithdrawalReceipt,
};
use crate::domain::value_objects::{AccountId, Timestamp, U256};
use crate::errors::MachineError;
use crate::ports::outbound::PayoutSink;
use crate::versions::{schema, LogicVersion};

// =============================================================================
// UPGRADE PROXY
// =============================================================================

/// The state record plus its current logic binding.
///
/// Not internally synchronized; the service wraps it in a single lock so
/// every operation, upgrades included, is serialized.
#[derive(Clone, Debug)]
pub struct UpgradeProxy {
    state: StateRecord,
    active: LogicVersion,
}

impl UpgradeProxy {
    /// Deploys a new machine bound to v1.
    #[must_use]
    pub fn initialize(inventory: u64, owner: AccountId) -> Self {
        Self {
            state: StateRecord::initialize(inventory, owner),
            active: LogicVersion::V1,
        }
    }

    /// Accept a payment and dispense units per the active version.
    pub fn purchase(&mut self, payment: U256) -> Result<PurchaseReceipt, MachineError> {
        self.active.module().purchase(&mut self.state, payment)
    }

    /// Withdraw accumulated profit per the active version.
    pub fn withdraw(
        &mut self,
        caller: AccountId,
        now: Timestamp,
        sink: &dyn PayoutSink,
    ) -> Result<WithdrawalReceipt, MachineError> {
        self.active
            .module()
            .withdraw(&mut self.state, caller, now, sink)
    }

    /// Add units to inventory per the active version.
    pub fn restock(&mut self, caller: AccountId, amount: u64) -> Result<RestockReceipt, MachineError> {
        self.active.module().restock(&mut self.state, caller, amount)
    }

    /// Rebind to `target`, leaving the record untouched.
    ///
    /// Owner-only. Rejected unless the target's layout extends the active
    /// one append-only, which rules out downgrades and any migration that
    /// would reinterpret stored fields.
    pub fn upgrade(&mut self, caller: AccountId, target: LogicVersion) -> Result<(), MachineError> {
        self.state.ensure_owner(caller)?;

        if !schema::is_append_only_extension(self.active.layout(), target.layout()) {
            return Err(MachineError::IncompatibleLayout {
                from: self.active,
                to: target,
            });
        }

        self.active = target;
        Ok(())
    }

    /// The logic version currently bound.
    #[must_use]
    pub fn active_version(&self) -> LogicVersion {
        self.active
    }

    /// Units currently available for purchase.
    #[must_use]
    pub fn inventory(&self) -> u64 {
        self.state.inventory
    }

    /// Accumulated profit in wei.
    #[must_use]
    pub fn profit(&self) -> U256 {
        self.state.profit
    }

    /// The machine owner.
    #[must_use]
    pub fn owner(&self) -> AccountId {
        self.state.owner
    }

    /// Wei required per unit.
    #[must_use]
    pub fn unit_price(&self) -> U256 {
        self.state.unit_price
    }

    /// The full state record.
    #[must_use]
    pub fn state(&self) -> &StateRecord {
        &self.state
    }
}

// =============================================================================
// TESTS
// =============================================================================
