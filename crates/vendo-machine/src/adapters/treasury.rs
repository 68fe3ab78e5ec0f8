//! # Payout Sink Adapters
//!
//! An in-memory [`PayoutSink`] that records every credit. Withdrawal tests
//! assert against its ledger; it also serves as the default sink for
//! deployments with no external transfer leg.

use crate::domain::value_objects::{AccountId, U256};
use crate::errors::PayoutError;
use crate::ports::outbound::PayoutSink;
use std::sync::RwLock;

/// Payout sink that appends every credit to an in-memory ledger.
#[derive(Debug, Default)]
pub struct InMemoryTreasury {
    credits: RwLock<Vec<(AccountId, U256)>>,
}

impl InMemoryTreasury {
    /// Creates an empty treasury.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All credits recorded so far, in order.
    #[must_use]
    pub fn credits(&self) -> Vec<(AccountId, U256)> {
        match self.credits.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Total amount credited to `account` across all payouts.
    #[must_use]
    pub fn total_credited(&self, account: AccountId) -> U256 {
        self.credits()
            .iter()
            .filter(|(to, _)| *to == account)
            .fold(U256::zero(), |acc, (_, amount)| {
                acc.saturating_add(*amount)
            })
    }
}

impl PayoutSink for InMemoryTreasury {
    fn credit(&self, to: AccountId, amount: U256) -> Result<(), PayoutError> {
        let mut guard = self
            .credits
            .write()
            .map_err(|_| PayoutError::Unavailable)?;
        guard.push((to, amount));
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
