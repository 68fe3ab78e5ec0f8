//! # Machine Events
//!
//! Defines the event types that flow through the bus. The vending machine
//! emits exactly one kind of event: the low-stock signal.

use serde::{Deserialize, Serialize};
use vendo_types::LowStockNotice;

/// All events that can be published to the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineEvent {
    /// An operation found inventory at or below the low-stock threshold.
    ///
    /// Emitted synchronously by the triggering operation (a purchase that
    /// found low stock, or a withdrawal completed at low inventory).
    LowStock(LowStockNotice),
}

impl MachineEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::LowStock(_) => EventTopic::Inventory,
        }
    }
}

impl From<LowStockNotice> for MachineEvent {
    fn from(notice: LowStockNotice) -> Self {
        Self::LowStock(notice)
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Inventory-level signals (low stock).
    Inventory,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &MachineEvent) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic())
    }
}
