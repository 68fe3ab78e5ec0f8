//! # Vendo Bus - Event Channel for Machine Notifications
//!
//! An append-only, ordered, one-directional notification stream. The vending
//! machine publishes [`MachineEvent`]s synchronously from within the
//! operation that triggered them; observers subscribe and receive events in
//! emission order.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │   Machine    │                    │  Observer    │
//! │   service    │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! Events are never retried or deduplicated: two qualifying operations emit
//! two events, even with identical payloads. Delivery beyond the channel's
//! own buffering is not guaranteed; a lagging subscriber loses the oldest
//! events first.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, MachineEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before older events are dropped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
