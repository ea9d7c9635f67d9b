//! WebSocket push channel.
//!
//! Provides the connection registry, the bus-to-socket fan-out, heartbeat
//! pings, and the HTTP upgrade handler used by Axum routes.

mod fanout;
mod handler;
mod heartbeat;
pub mod manager;

pub use fanout::{encode_event, start_fanout};
pub use handler::{snapshot_messages, ws_handler};
pub use heartbeat::{start_heartbeat, HEARTBEAT_INTERVAL};
pub use manager::WsManager;
