use std::sync::Arc;
use std::time::Duration;

use crate::ws::manager::WsManager;

/// Default spacing of listener pings.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Spawn the listener heartbeat: every `every`, ping all push-channel
/// listeners and prune the ones that can no longer be reached.
///
/// The returned `JoinHandle` is aborted during shutdown.
pub fn start_heartbeat(
    ws_manager: Arc<WsManager>,
    every: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            let (reached, dropped) = ws_manager.ping_all().await;
            if dropped > 0 {
                tracing::info!(reached, dropped, "Pruned stale listeners");
            } else {
                tracing::trace!(reached, "Listener heartbeat");
            }
        }
    })
}
