//! # Ports Layer
//!
//! Trait definitions between the machine core and the outside world.
//!
//! - **Driving ports (inbound)**: [`VendingMachineApi`]
//! - **Driven ports (outbound)**: [`TimeSource`], [`PayoutSink`]
//!
//! No concrete implementations live in this module.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
