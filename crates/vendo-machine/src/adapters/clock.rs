//! # Time Source Adapters
//!
//! Two implementations of [`TimeSource`]: the system clock for production
//! and a manually advanced clock for tests. Cooldown tests advance the
//! manual clock instead of sleeping.

use crate::domain::value_objects::Timestamp;
use crate::ports::outbound::TimeSource;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// =============================================================================
// SYSTEM CLOCK
// =============================================================================

/// Wall-clock time source backed by [`SystemTime`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        // A system clock before the epoch reads as zero rather than failing.
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Timestamp::from_secs(secs)
    }
}

// =============================================================================
// MANUAL CLOCK
// =============================================================================

/// A time source that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_secs: AtomicU64,
}

impl ManualClock {
    /// Creates a clock starting at the given time.
    #[must_use]
    pub fn starting_at(secs: u64) -> Self {
        Self {
            now_secs: AtomicU64::new(secs),
        }
    }

    /// Sets the current time.
    pub fn set(&self, secs: u64) {
        self.now_secs.store(secs, Ordering::SeqCst);
    }

    /// Advances the current time by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now_secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.now_secs.load(Ordering::SeqCst))
    }
}

// =============================================================================
// TESTS
// =============================================================================
