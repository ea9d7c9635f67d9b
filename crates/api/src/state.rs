use std::sync::Arc;

use radio_events::EventBus;

use crate::config::ServerConfig;
use crate::station::ListenerGauge;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: radio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// WebSocket connection registry (listeners).
    pub ws_manager: Arc<WsManager>,
    /// Typed station event bus; the WebSocket fan-out subscribes to it.
    pub event_bus: Arc<EventBus>,
    /// Last sampled listener count.
    pub listeners: Arc<ListenerGauge>,
}

impl AppState {
    /// Assemble state with a fresh registry, bus and gauge.
    pub fn new(pool: radio_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            ws_manager: Arc::new(WsManager::new()),
            event_bus: Arc::new(EventBus::default()),
            listeners: Arc::new(ListenerGauge::default()),
        }
    }
}
