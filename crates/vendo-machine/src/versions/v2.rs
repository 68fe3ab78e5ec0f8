//! # Logic v2
//!
//! Generalizes purchase to batches: a payment buys `payment / unit_price`
//! whole units in one operation. Any remainder from non-exact division is
//! retained as profit, not refunded. Storage layout is unchanged from v1.

use crate::domain::entities::{PurchaseReceipt, StateRecord};
use crate::domain::value_objects::U256;
use crate::errors::MachineError;
use crate::versions::schema::FieldDescriptor;
use crate::versions::{v1, LogicModule, LogicVersion};

/// Storage layout declared by v2. Identical to v1; this release changed
/// behavior only.
pub const LAYOUT: &[FieldDescriptor] = v1::LAYOUT;

/// The v2 logic module.
#[derive(Clone, Copy, Debug, Default)]
pub struct V2Logic;

impl LogicModule for V2Logic {
    fn version(&self) -> LogicVersion {
        LogicVersion::V2
    }

    fn layout(&self) -> &'static [FieldDescriptor] {
        LAYOUT
    }

    fn purchase(
        &self,
        state: &mut StateRecord,
        payment: U256,
    ) -> Result<PurchaseReceipt, MachineError> {
        batch_purchase(state, payment)
    }
}

/// Batch purchase shared by v2 and every later version.
///
/// Validates fully before the first mutation so a failure commits nothing.
pub(crate) fn batch_purchase(
    state: &mut StateRecord,
    payment: U256,
) -> Result<PurchaseReceipt, MachineError> {
    let units_wide = payment / state.unit_price;
    if units_wide.is_zero() {
        return Err(MachineError::ZeroUnits {
            payment,
            unit_price: state.unit_price,
        });
    }
    if units_wide > U256::from(state.inventory) {
        // Saturate for display; anything above u64::MAX is out of stock
        // regardless.
        let requested = if units_wide > U256::from(u64::MAX) {
            u64::MAX
        } else {
            units_wide.as_u64()
        };
        return Err(MachineError::OutOfStock {
            requested,
            available: state.inventory,
        });
    }
    // Bounded by inventory, so the narrowing is exact.
    let units = units_wide.as_u64();

    let new_profit = state
        .profit
        .checked_add(payment)
        .ok_or(MachineError::Arithmetic)?;

    state.inventory -= units;
    state.profit = new_profit;

    Ok(PurchaseReceipt {
        units,
        payment,
        inventory_remaining: state.inventory,
        events: Vec::new(),
    })
}

// =============================================================================
// TESTS
// =============================================================================
