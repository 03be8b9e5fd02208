//! Event types for the podcastr event system
//!
//! Provides the player event definitions and the EventBus used to fan
//! state changes out to asynchronous listeners.

mod change_types;

pub use change_types::PlayerChange;

use crate::models::PlayerSnapshot;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Default number of buffered events before slow receivers start lagging
pub const DEFAULT_EVENT_CAPACITY: usize = 100;

/// Podcastr event types
///
/// Events are broadcast via EventBus and can be serialized for logging or
/// forwarding to other processes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerEvent {
    /// Player state changed
    ///
    /// Emitted exactly once per store operation, after the operation has
    /// been applied, even when the operation left the state unchanged.
    StateChanged {
        /// Operation that ran
        change: PlayerChange,
        /// State after the operation
        snapshot: PlayerSnapshot,
        /// When the operation ran
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

impl PlayerEvent {
    /// Build a StateChanged event stamped with the current time
    pub fn state_changed(change: PlayerChange, snapshot: PlayerSnapshot) -> Self {
        PlayerEvent::StateChanged {
            change,
            snapshot,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Event type name, for log lines
    pub fn event_type(&self) -> &'static str {
        match self {
            PlayerEvent::StateChanged { .. } => "StateChanged",
        }
    }
}

/// One-to-many broadcast of player events
///
/// Thin wrapper over `tokio::sync::broadcast`. Receivers that fall more than
/// `capacity` events behind lose the oldest events.
pub struct EventBus {
    tx: broadcast::Sender<PlayerEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus with specified channel capacity
    ///
    /// # Examples
    ///
    /// ```
    /// use podcastr_common::events::EventBus;
    ///
    /// let event_bus = EventBus::new(100);
    /// assert_eq!(event_bus.capacity(), 100);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    ///
    /// Events emitted before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Returns `Ok(subscriber_count)` if at least one subscriber exists,
    /// `Err` if no subscribers are listening.
    #[allow(clippy::result_large_err)]
    pub fn emit(
        &self,
        event: PlayerEvent,
    ) -> Result<usize, broadcast::error::SendError<PlayerEvent>> {
        self.tx.send(event)
    }

    /// Emit an event, ignoring if no subscribers are listening
    pub fn emit_lossy(&self, event: PlayerEvent) {
        let _ = self.tx.send(event);
    }

    /// Get the current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Get the channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}
