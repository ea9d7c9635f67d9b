//! Relays station events from the bus to every connected listener.

use std::sync::Arc;

use axum::extract::ws::Message;
use radio_events::StationEvent;
use tokio::sync::broadcast;

use crate::ws::manager::WsManager;

/// Encode an event as a WebSocket text frame.
///
/// Returns `None` (and logs) if serialization fails.
pub fn encode_event(event: &StationEvent) -> Option<Message> {
    match event.to_json() {
        Ok(json) => Some(Message::Text(json.into())),
        Err(e) => {
            tracing::error!(error = %e, kind = event.kind(), "Failed to encode station event");
            None
        }
    }
}

/// Spawn the fan-out loop.
///
/// The loop exits when the bus is dropped; the returned handle is aborted
/// during shutdown.
pub fn start_fanout(
    ws_manager: Arc<WsManager>,
    mut receiver: broadcast::Receiver<StationEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    let Some(message) = encode_event(&event) else {
                        continue;
                    };
                    let delivered = ws_manager.broadcast(message).await;
                    tracing::debug!(kind = event.kind(), delivered, "Station event fanned out");
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Listener fan-out lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, fan-out shutting down");
                    break;
                }
            }
        }
    })
}
