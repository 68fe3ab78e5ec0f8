//! # Logic v3
//!
//! First version with withdrawal. The record gains a `last_withdrawal_time`
//! field and withdrawals are rate-limited to one per week. This release
//! shipped with a fault: the balance guard was written as a subtraction, so
//! withdrawing with zero profit aborts with an arithmetic underflow instead
//! of a descriptive error. v4 fixes it; this module preserves the shipped
//! behavior.

use crate::domain::entities::{PurchaseReceipt, StateRecord, WithdrawalReceipt};
use crate::domain::invariants::params;
use crate::domain::value_objects::{AccountId, Timestamp, U256};
use crate::errors::MachineError;
use crate::ports::outbound::PayoutSink;
use crate::versions::schema::{FieldDescriptor, FieldKind};
use crate::versions::{v2, LogicModule, LogicVersion};

/// Storage layout declared by v3: v1's fields plus the withdrawal clock.
pub const LAYOUT: &[FieldDescriptor] = &[
    FieldDescriptor::new("inventory", FieldKind::U64),
    FieldDescriptor::new("unit_price", FieldKind::U256),
    FieldDescriptor::new("profit", FieldKind::U256),
    FieldDescriptor::new("owner", FieldKind::Account),
    FieldDescriptor::new("last_withdrawal_time", FieldKind::Timestamp),
];

/// The v3 logic module.
#[derive(Clone, Copy, Debug, Default)]
pub struct V3Logic;

impl LogicModule for V3Logic {
    fn version(&self) -> LogicVersion {
        LogicVersion::V3
    }

    fn layout(&self) -> &'static [FieldDescriptor] {
        LAYOUT
    }

    fn purchase(
        &self,
        state: &mut StateRecord,
        payment: U256,
    ) -> Result<PurchaseReceipt, MachineError> {
        v2::batch_purchase(state, payment)
    }

    fn withdraw(
        &self,
        state: &mut StateRecord,
        caller: AccountId,
        now: Timestamp,
        sink: &dyn PayoutSink,
    ) -> Result<WithdrawalReceipt, MachineError> {
        state.ensure_owner(caller)?;

        let elapsed = now.elapsed_since(state.last_withdrawal_time);
        if elapsed < params::WITHDRAWAL_COOLDOWN_SECS {
            return Err(MachineError::WithdrawalTooSoon {
                elapsed,
                required: params::WITHDRAWAL_COOLDOWN_SECS,
            });
        }

        // Balance guard as shipped: a subtraction standing in for a
        // comparison. Zero profit underflows here rather than producing a
        // descriptive error.
        state
            .profit
            .checked_sub(U256::one())
            .ok_or(MachineError::Arithmetic)?;

        let payout = state.profit;
        sink.credit(state.owner, payout)?;

        state.profit = U256::zero();
        state.last_withdrawal_time = now;

        Ok(WithdrawalReceipt {
            payout,
            withdrawn_at: now,
            events: Vec::new(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
