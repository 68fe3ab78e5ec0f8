//! # Versioned Logic Modules
//!
//! The four logic versions the machine has shipped, each a superset (in
//! fields) and a revision (in behavior) of its predecessor:
//!
//! | Version | Purchase | Withdraw | Restock | Events |
//! |---------|----------|----------|---------|--------|
//! | v1 | single unit, keeps full payment | — | — | — |
//! | v2 | batch (`payment / price` units) | — | — | — |
//! | v3 | as v2 | cooldown only, **unguarded balance** | — | — |
//! | v4 | as v2 + low-stock notice | cooldown + balance guard | owner-only | `LowStock` |
//!
//! Dispatch is a tagged [`LogicVersion`] selecting a [`LogicModule`]
//! implementation. Operations a version does not ship fail with
//! [`MachineError::Unsupported`] — the analogue of calling a selector the
//! deployed code does not have.

pub mod schema;
pub mod v1;
pub mod v2;
pub mod v3;
pub mod v4;

use crate::domain::entities::{PurchaseReceipt, RestockReceipt, StateRecord, WithdrawalReceipt};
use crate::domain::value_objects::{AccountId, Timestamp, U256};
use crate::errors::MachineError;
use crate::ports::outbound::PayoutSink;
use schema::FieldDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// LOGIC MODULE TRAIT
// =============================================================================

/// The operation set bound to the state record at a point in time.
///
/// Implementations are stateless: all persistent data lives in the
/// `StateRecord` they are handed. Every operation either commits fully or
/// returns an error having mutated nothing.
pub trait LogicModule: Send + Sync {
    /// The version this module implements.
    fn version(&self) -> LogicVersion;

    /// The ordered storage layout this version expects.
    fn layout(&self) -> &'static [FieldDescriptor];

    /// Accept a payment and dispense units.
    fn purchase(
        &self,
        state: &mut StateRecord,
        payment: U256,
    ) -> Result<PurchaseReceipt, MachineError>;

    /// Withdraw accumulated profit to the owner. Absent before v3.
    fn withdraw(
        &self,
        state: &mut StateRecord,
        caller: AccountId,
        now: Timestamp,
        sink: &dyn PayoutSink,
    ) -> Result<WithdrawalReceipt, MachineError> {
        let _ = (state, caller, now, sink);
        Err(MachineError::Unsupported {
            operation: "withdraw",
            version: self.version(),
        })
    }

    /// Add units to inventory. Absent before v4.
    fn restock(
        &self,
        state: &mut StateRecord,
        caller: AccountId,
        amount: u64,
    ) -> Result<RestockReceipt, MachineError> {
        let _ = (state, caller, amount);
        Err(MachineError::Unsupported {
            operation: "restock",
            version: self.version(),
        })
    }
}

// =============================================================================
// VERSION SELECTOR
// =============================================================================

/// Tag selecting which logic module interprets the state record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogicVersion {
    /// Initial release: single-unit purchase only.
    V1,
    /// Batch purchase.
    V2,
    /// Withdrawal with cooldown (shipped with the unguarded-balance fault).
    V3,
    /// Guarded withdrawal, restock, low-stock notices.
    V4,
}

impl LogicVersion {
    /// All versions, oldest first.
    pub const ALL: [Self; 4] = [Self::V1, Self::V2, Self::V3, Self::V4];

    /// The module implementing this version.
    #[must_use]
    pub fn module(self) -> &'static dyn LogicModule {
        match self {
            Self::V1 => &v1::V1Logic,
            Self::V2 => &v2::V2Logic,
            Self::V3 => &v3::V3Logic,
            Self::V4 => &v4::V4Logic,
        }
    }

    /// The storage layout this version declares.
    #[must_use]
    pub fn layout(self) -> &'static [FieldDescriptor] {
        self.module().layout()
    }
}

impl fmt::Display for LogicVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => write!(f, "v1"),
            Self::V2 => write!(f, "v2"),
            Self::V3 => write!(f, "v3"),
            Self::V4 => write!(f, "v4"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
