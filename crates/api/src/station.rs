//! Station orchestration: the advance entry point and the listener gauge.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use radio_core::error::CoreError;
use radio_db::models::track::TrackWithLikes;
use radio_db::repositories::PlaylistRepo;
use radio_events::{EventBus, StationEvent};

use crate::error::AppResult;
use crate::state::AppState;
use crate::ws::WsManager;

/// Approximate number of connected listeners, as of the last sample.
#[derive(Debug, Default)]
pub struct ListenerGauge {
    count: AtomicUsize,
}

impl ListenerGauge {
    pub fn get(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Store a new sample. Returns `true` if the value changed.
    pub fn record(&self, count: usize) -> bool {
        self.count.swap(count, Ordering::Relaxed) != count
    }
}

/// Move the station to its next track and announce it to every listener.
///
/// Fails with [`CoreError::EmptyCatalog`] when there is nothing to play.
pub async fn advance(state: &AppState) -> AppResult<TrackWithLikes> {
    let track = PlaylistRepo::advance(&state.pool)
        .await?
        .ok_or(CoreError::EmptyCatalog)?;

    let receivers = state
        .event_bus
        .publish(StationEvent::TrackChanged(track.clone()));
    tracing::info!(
        track_id = track.track.id,
        title = %track.track.title,
        receivers,
        "Station advanced"
    );

    Ok(track)
}

/// Spawn a task that samples the registry's connection count every
/// `interval` and publishes [`StationEvent::ListenerCount`] when it changes.
pub fn start_listener_sampler(
    ws_manager: Arc<WsManager>,
    gauge: Arc<ListenerGauge>,
    event_bus: Arc<EventBus>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);

        loop {
            ticker.tick().await;
            let count = ws_manager.connection_count().await;
            if gauge.record(count) {
                tracing::debug!(count, "Listener count changed");
                event_bus.publish(StationEvent::ListenerCount(count));
            }
        }
    })
}
