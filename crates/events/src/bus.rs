//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the central publish/subscribe hub for [`StationEvent`]s.
//! It is designed to be shared via `Arc<EventBus>` across the application.

use radio_db::models::track::TrackWithLikes;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// StationEvent
// ---------------------------------------------------------------------------

/// An event pushed to every connected listener.
///
/// Serialized adjacently tagged, e.g.
/// `{"event": "trackChanged", "data": {...}}` or
/// `{"event": "listenerCount", "data": 12}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum StationEvent {
    /// The playlist pointer moved; carries the full new track.
    TrackChanged(TrackWithLikes),
    /// Latest sample of the approximate listener gauge.
    ListenerCount(usize),
}

impl StationEvent {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TrackChanged(_) => "trackChanged",
            Self::ListenerCount(_) => "listenerCount",
        }
    }

    /// Encode the event as the JSON text sent over the push channel.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`StationEvent`].
///
/// # Usage
///
/// ```rust
/// use radio_events::bus::{EventBus, StationEvent};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(StationEvent::ListenerCount(3));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<StationEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Returns the number of subscribers that will see the event. With no
    /// subscribers the event is dropped and `0` is returned.
    pub fn publish(&self, event: StationEvent) -> usize {
        let kind = event.kind();
        // A SendError only means there are zero receivers.
        let receivers = self.sender.send(event).unwrap_or(0);
        tracing::trace!(kind, receivers, "Station event published");
        receivers
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<StationEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
