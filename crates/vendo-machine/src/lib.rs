//! # Vendo Machine - Upgradeable Vending Ledger
//!
//! A vending machine whose business rules can be upgraded in place while its
//! persistent state survives untouched. One state record, one owner, four
//! shipped logic versions:
//!
//! | Version | Purchase | Withdraw | Restock | Events |
//! |---------|----------|----------|---------|--------|
//! | v1 | single unit, keeps full payment | — | — | — |
//! | v2 | batch (`payment / price` units) | — | — | — |
//! | v3 | as v2 | cooldown only, unguarded balance | — | — |
//! | v4 | as v2 + low-stock notice | cooldown + balance guard | owner-only | `LowStock` |
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Conservation (profit = received - withdrawn) | `domain/invariants.rs` - `check_conservation_invariant()` |
//! | Withdrawal time monotonic | `domain/invariants.rs` - `check_withdrawal_time_invariant()` |
//! | All-or-nothing operations | each logic module validates before its first mutation |
//! | Append-only schema evolution | `versions/schema.rs` - `is_append_only_extension()`, checked in `proxy.rs` |
//!
//! ## Usage Example
//!
//! ```ignore
//! use vendo_machine::prelude::*;
//!
//! let service = create_test_service(owner);
//! service.upgrade(owner, LogicVersion::V4).await?;
//!
//! let receipt = service.purchase(buyer, U256::from(5000u64)).await?;
//! println!("Dispensed {} units", receipt.units);
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod proxy;
pub mod service;
pub mod versions;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{
        PurchaseReceipt, RestockReceipt, StateRecord, WithdrawalReceipt,
    };

    // Value objects
    pub use crate::domain::value_objects::{wei, AccountId, LowStockNotice, Timestamp, U256};

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, params, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::VendingMachineApi;
    pub use crate::ports::outbound::{PayoutSink, TimeSource};

    // Versions and upgrade control
    pub use crate::proxy::UpgradeProxy;
    pub use crate::versions::{schema::FieldDescriptor, LogicModule, LogicVersion};

    // Errors
    pub use crate::errors::{MachineError, PayoutError};

    // Adapters
    pub use crate::adapters::{InMemoryTreasury, ManualClock, SystemClock};

    // Service
    pub use crate::service::{create_test_service, ServiceConfig, ServiceStats, VendingService};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
