//! # Notification Payloads
//!
//! Payloads carried on the event channel. The machine emits exactly one kind
//! of notification: the low-stock signal.

use crate::account::AccountId;
use serde::{Deserialize, Serialize};

/// Notification that an operation found inventory at or below the
/// low-stock threshold.
///
/// Emitted synchronously by the operation that observed the condition (a
/// purchase that found low stock on the shelf, or a withdrawal completed
/// while inventory sits at or below the threshold). Notices are never
/// deduplicated: each qualifying operation emits its own, even with an
/// identical payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockNotice {
    /// The machine owner to alert.
    pub owner: AccountId,
    /// Inventory at the time of emission.
    pub inventory: u64,
}

impl LowStockNotice {
    /// Creates a new low-stock notice.
    #[must_use]
    pub const fn new(owner: AccountId, inventory: u64) -> Self {
        Self { owner, inventory }
    }
}

// =============================================================================
// TESTS
// =============================================================================
