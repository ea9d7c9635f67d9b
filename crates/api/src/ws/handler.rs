use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use radio_db::repositories::PlaylistRepo;
use radio_events::StationEvent;

use crate::state::AppState;
use crate::ws::fanout::encode_event;

/// HTTP handler that upgrades the connection to WebSocket.
///
/// After the upgrade the connection is registered with `WsManager` (with
/// its now-playing snapshot queued first) and managed by two tasks
/// (sender + receiver).
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Messages sent to a listener right after it connects: the track on air
/// (if any) followed by the latest listener gauge.
pub async fn snapshot_messages(state: &AppState) -> Vec<Message> {
    let mut events = Vec::with_capacity(2);

    match PlaylistRepo::current_track(&state.pool).await {
        Ok(Some(track)) => events.push(StationEvent::TrackChanged(track)),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Failed to load snapshot track"),
    }
    events.push(StationEvent::ListenerCount(state.listeners.get()));

    events.iter().filter_map(encode_event).collect()
}

/// Manage a single listener connection after upgrade.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, "Listener connected");

    let mut rx = state
        .ws_manager
        .add_with_snapshot(conn_id.clone(), snapshot_messages(&state))
        .await;

    let (mut sink, mut stream) = socket.split();

    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    // The push channel is one-way; inbound frames only signal liveness.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    state.ws_manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, "Listener disconnected");
}
