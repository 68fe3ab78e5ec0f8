//! # Vendo Types - Shared Value Objects
//!
//! Foundation types shared by every Vendo crate:
//!
//! - [`AccountId`] — 20-byte principal identity (machine owner, buyers)
//! - [`Timestamp`] — seconds-since-epoch wall time supplied by an external
//!   clock; the core performs no skew correction
//! - [`U256`] — wei amounts (payments, profit), re-exported from
//!   `primitive-types`
//! - [`LowStockNotice`] — the one notification payload the machine emits
//!
//! These types are defined by their value, not identity, and carry no
//! behavior beyond construction, comparison, and formatting.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod account;
pub mod notices;
pub mod time;

pub use account::AccountId;
pub use notices::LowStockNotice;
pub use time::Timestamp;

// Re-export U256 from primitive-types for wei arithmetic
pub use primitive_types::U256;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
