use std::collections::HashMap;
use std::future::Future;

use axum::body::Bytes;
use axum::extract::ws::Message;
use radio_core::types::Timestamp;
use tokio::sync::{mpsc, RwLock};

/// Channel sender half for pushing messages to a WebSocket connection.
pub type WsSender = mpsc::UnboundedSender<Message>;

/// Metadata for a single WebSocket connection.
pub struct WsConnection {
    /// Channel sender for outbound messages to this connection.
    pub sender: WsSender,
    /// When this connection was established.
    pub connected_at: Timestamp,
}

/// Registry of all connected listeners.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct WsManager {
    connections: RwLock<HashMap<String, WsConnection>>,
}

impl WsManager {
    /// Create a new, empty connection manager.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new connection.
    ///
    /// Returns the receiver half of the message channel so the caller can
    /// forward messages to the WebSocket sink.
    pub async fn add(&self, conn_id: String) -> mpsc::UnboundedReceiver<Message> {
        self.add_with_snapshot(conn_id, async { Vec::new() }).await
    }

    /// Register a new connection and queue its initial snapshot first.
    ///
    /// `snapshot` is awaited while the registry write lock is held, so no
    /// broadcast can slip in between reading the snapshot and registering
    /// the connection. Anything broadcast afterwards is queued behind the
    /// snapshot.
    pub async fn add_with_snapshot<F>(
        &self,
        conn_id: String,
        snapshot: F,
    ) -> mpsc::UnboundedReceiver<Message>
    where
        F: Future<Output = Vec<Message>>,
    {
        let mut conns = self.connections.write().await;

        let (tx, rx) = mpsc::unbounded_channel();
        for message in snapshot.await {
            let _ = tx.send(message);
        }

        let conn = WsConnection {
            sender: tx,
            connected_at: chrono::Utc::now(),
        };
        conns.insert(conn_id, conn);
        rx
    }

    /// Remove a connection by its ID.
    pub async fn remove(&self, conn_id: &str) {
        if let Some(conn) = self.connections.write().await.remove(conn_id) {
            let connected_for = chrono::Utc::now() - conn.connected_at;
            tracing::debug!(
                conn_id,
                connected_secs = connected_for.num_seconds(),
                "Listener removed"
            );
        }
    }

    /// Broadcast a message to all connected clients.
    ///
    /// Connections whose send channels are closed are silently skipped
    /// (they will be cleaned up on their next receive loop iteration).
    /// Returns the number of connections the message was queued for.
    pub async fn broadcast(&self, message: Message) -> usize {
        let conns = self.connections.read().await;
        conns
            .values()
            .filter(|conn| conn.sender.send(message.clone()).is_ok())
            .count()
    }

    /// Return the current number of active connections.
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Send a Close frame to every connection, then clear the map.
    ///
    /// Used during graceful shutdown to notify all clients before the
    /// server stops.
    pub async fn shutdown_all(&self) {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Close(None));
        }
        conns.clear();
        tracing::info!(count, "Closed all WebSocket connections");
    }

    /// Send a Ping frame to every listener and drop the ones whose sender
    /// task is gone, so the listener gauge stops counting them.
    ///
    /// Returns `(reached, dropped)`.
    pub async fn ping_all(&self) -> (usize, usize) {
        let mut conns = self.connections.write().await;
        let before = conns.len();
        conns.retain(|conn_id, conn| {
            let alive = conn.sender.send(Message::Ping(Bytes::new())).is_ok();
            if !alive {
                tracing::debug!(conn_id = %conn_id, "Dropping stale listener");
            }
            alive
        });
        (conns.len(), before - conns.len())
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}
