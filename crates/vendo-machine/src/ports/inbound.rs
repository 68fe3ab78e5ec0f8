//! # Driving Ports (API - Inbound)
//!
//! The interface the machine exposes to callers. The service implements it;
//! external surfaces (RPC, CLI) would drive the machine through it.

use crate::domain::entities::{PurchaseReceipt, RestockReceipt, WithdrawalReceipt};
use crate::domain::value_objects::{AccountId, U256};
use crate::errors::MachineError;
use crate::versions::LogicVersion;
use async_trait::async_trait;

// =============================================================================
// VENDING MACHINE API (Primary Driving Port)
// =============================================================================

/// Primary API for operating the machine.
///
/// All operations funnel through one serialization point: the implementation
/// guarantees that concurrent calls observe and produce consistent state, as
/// if executed one at a time.
#[async_trait]
pub trait VendingMachineApi: Send + Sync {
    /// Accept a payment and dispense units per the active logic version.
    async fn purchase(
        &self,
        caller: AccountId,
        payment: U256,
    ) -> Result<PurchaseReceipt, MachineError>;

    /// Withdraw accumulated profit to the owner.
    ///
    /// Fails with [`MachineError::Unsupported`] before v3.
    async fn withdraw(&self, caller: AccountId) -> Result<WithdrawalReceipt, MachineError>;

    /// Add units to inventory.
    ///
    /// Fails with [`MachineError::Unsupported`] before v4.
    async fn restock(&self, caller: AccountId, amount: u64) -> Result<RestockReceipt, MachineError>;

    /// Rebind the machine to a different logic version.
    ///
    /// Owner-only. The target's storage layout must be an append-only
    /// extension of the active one.
    async fn upgrade(&self, caller: AccountId, target: LogicVersion) -> Result<(), MachineError>;

    /// The logic version currently bound.
    async fn active_version(&self) -> LogicVersion;

    /// Units currently available for purchase.
    async fn inventory(&self) -> u64;

    /// Accumulated profit in wei.
    async fn profit(&self) -> U256;

    /// The machine owner.
    async fn owner(&self) -> AccountId;
}
