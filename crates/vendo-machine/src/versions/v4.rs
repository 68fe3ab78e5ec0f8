//! # Logic v4
//!
//! The current release. Fixes v3's withdrawal fault with a real balance
//! guard, adds owner-only restock, and emits a low-stock notice whenever an
//! operation finds inventory at or below the threshold. The record gains a
//! `low_stock_threshold` field.

use crate::domain::entities::{
    PurchaseReceipt, RestockReceipt, StateRecord, WithdrawalReceipt,
};
use crate::domain::invariants::params;
use crate::domain::value_objects::{AccountId, LowStockNotice, Timestamp, U256};
use crate::errors::MachineError;
use crate::ports::outbound::PayoutSink;
use crate::versions::schema::{FieldDescriptor, FieldKind};
use crate::versions::{v2, LogicModule, LogicVersion};

/// Storage layout declared by v4: v3's fields plus the threshold.
pub const LAYOUT: &[FieldDescriptor] = &[
    FieldDescriptor::new("inventory", FieldKind::U64),
    FieldDescriptor::new("unit_price", FieldKind::U256),
    FieldDescriptor::new("profit", FieldKind::U256),
    FieldDescriptor::new("owner", FieldKind::Account),
    FieldDescriptor::new("last_withdrawal_time", FieldKind::Timestamp),
    FieldDescriptor::new("low_stock_threshold", FieldKind::U64),
];

/// The v4 logic module.
#[derive(Clone, Copy, Debug, Default)]
pub struct V4Logic;

impl LogicModule for V4Logic {
    fn version(&self) -> LogicVersion {
        LogicVersion::V4
    }

    fn layout(&self) -> &'static [FieldDescriptor] {
        LAYOUT
    }

    fn purchase(
        &self,
        state: &mut StateRecord,
        payment: U256,
    ) -> Result<PurchaseReceipt, MachineError> {
        let stock_found = state.inventory;
        let mut receipt = v2::batch_purchase(state, payment)?;
        // The notice reports the stock the purchase found. A purchase that
        // starts above the threshold stays silent even when it ends below it.
        if stock_found <= state.low_stock_threshold {
            receipt
                .events
                .push(LowStockNotice::new(state.owner, stock_found));
        }
        Ok(receipt)
    }

    fn withdraw(
        &self,
        state: &mut StateRecord,
        caller: AccountId,
        now: Timestamp,
        sink: &dyn PayoutSink,
    ) -> Result<WithdrawalReceipt, MachineError> {
        state.ensure_owner(caller)?;

        // Cooldown is checked before the balance so a too-early retry is
        // reported as such even with nothing to withdraw.
        let elapsed = now.elapsed_since(state.last_withdrawal_time);
        if elapsed < params::WITHDRAWAL_COOLDOWN_SECS {
            return Err(MachineError::WithdrawalTooSoon {
                elapsed,
                required: params::WITHDRAWAL_COOLDOWN_SECS,
            });
        }

        if state.profit.is_zero() {
            return Err(MachineError::InsufficientProfit);
        }

        let payout = state.profit;
        sink.credit(state.owner, payout)?;

        state.profit = U256::zero();
        state.last_withdrawal_time = now;

        let mut events = Vec::new();
        if state.is_low_stock() {
            events.push(state.low_stock_notice());
        }

        Ok(WithdrawalReceipt {
            payout,
            withdrawn_at: now,
            events,
        })
    }

    fn restock(
        &self,
        state: &mut StateRecord,
        caller: AccountId,
        amount: u64,
    ) -> Result<RestockReceipt, MachineError> {
        state.ensure_owner(caller)?;
        if amount == 0 {
            return Err(MachineError::ZeroRestock);
        }

        state.inventory = state
            .inventory
            .checked_add(amount)
            .ok_or(MachineError::Arithmetic)?;

        Ok(RestockReceipt {
            added: amount,
            inventory: state.inventory,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
