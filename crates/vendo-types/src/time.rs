//! # Timestamps
//!
//! Wall-clock seconds supplied by an external time source. The ledger trusts
//! the supplied value and performs no skew correction of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds in one week. The withdrawal cooldown interval.
pub const ONE_WEEK_SECS: u64 = 604_800;

/// A point in time, in whole seconds since the Unix epoch.
///
/// The zero value doubles as "never": a state record that has never seen a
/// successful withdrawal carries `Timestamp::ZERO`, which makes the first
/// elapsed-time computation effectively unbounded.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// The zero timestamp ("never").
    pub const ZERO: Self = Self(0);

    /// Creates a timestamp from whole seconds since the epoch.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the timestamp as whole seconds since the epoch.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds elapsed since `earlier`, saturating to zero if `earlier`
    /// is in the future.
    #[must_use]
    pub const fn elapsed_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Returns this timestamp advanced by `secs` seconds.
    #[must_use]
    pub const fn advanced_by(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }

    /// Returns true if this is the zero timestamp.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Timestamp {
    fn from(secs: u64) -> Self {
        Self(secs)
    }
}

// =============================================================================
// TESTS
// =============================================================================
