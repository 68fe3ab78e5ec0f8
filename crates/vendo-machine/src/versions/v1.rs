//! # Logic v1
//!
//! The machine as first deployed: purchase only. One payment dispenses
//! exactly one unit, and the full payment is kept as profit regardless of
//! how far it exceeds the unit price. No refund, no price-based unit
//! computation. Documented behavior of the original release; later
//! versions revise it, this module preserves it.

use crate::domain::entities::{PurchaseReceipt, StateRecord};
use crate::domain::value_objects::U256;
use crate::errors::MachineError;
use crate::versions::schema::{FieldDescriptor, FieldKind};
use crate::versions::{LogicModule, LogicVersion};

/// Storage layout declared by v1.
pub const LAYOUT: &[FieldDescriptor] = &[
    FieldDescriptor::new("inventory", FieldKind::U64),
    FieldDescriptor::new("unit_price", FieldKind::U256),
    FieldDescriptor::new("profit", FieldKind::U256),
    FieldDescriptor::new("owner", FieldKind::Account),
];

/// The v1 logic module.
#[derive(Clone, Copy, Debug, Default)]
pub struct V1Logic;

impl LogicModule for V1Logic {
    fn version(&self) -> LogicVersion {
        LogicVersion::V1
    }

    fn layout(&self) -> &'static [FieldDescriptor] {
        LAYOUT
    }

    fn purchase(
        &self,
        state: &mut StateRecord,
        payment: U256,
    ) -> Result<PurchaseReceipt, MachineError> {
        if state.inventory == 0 {
            return Err(MachineError::OutOfStock {
                requested: 1,
                available: 0,
            });
        }

        let new_profit = state
            .profit
            .checked_add(payment)
            .ok_or(MachineError::Arithmetic)?;

        state.inventory -= 1;
        state.profit = new_profit;

        Ok(PurchaseReceipt {
            units: 1,
            payment,
            inventory_remaining: state.inventory,
            events: Vec::new(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
