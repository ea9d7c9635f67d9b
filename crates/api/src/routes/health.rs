use axum::extract::State;
use axum::{routing::get, Json, Router};
use radio_core::playlist::effective_current_id;
use radio_core::types::DbId;
use radio_db::repositories::{PlaylistRepo, TrackRepo};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, `idle` (no tracks to play) or `degraded` (database unreachable).
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
    /// Tracks in rotation; `None` when the catalog could not be read.
    pub catalog_size: Option<usize>,
    /// Track `/current` reports right now.
    pub on_air: Option<DbId>,
    /// Connected push-channel listeners.
    pub listeners: usize,
}

/// Catalog size and on-air track, read the same way `/current` does.
async fn station_snapshot(state: &AppState) -> Result<(usize, Option<DbId>), sqlx::Error> {
    let ids = TrackRepo::list_ids(&state.pool).await?;
    let pointer = PlaylistRepo::get_pointer(&state.pool).await?;
    Ok((ids.len(), effective_current_id(&ids, pointer.current_track_id)))
}

/// GET /health -- database reachability plus a summary of the station.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = radio_db::health_check(&state.pool).await.is_ok();

    let (catalog_size, on_air) = match station_snapshot(&state).await {
        Ok((size, on_air)) => (Some(size), on_air),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read the catalog");
            (None, None)
        }
    };

    let status = match (db_healthy, catalog_size) {
        (false, _) | (_, None) => "degraded",
        (true, Some(0)) => "idle",
        (true, Some(_)) => "ok",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        catalog_size,
        on_air,
        listeners: state.ws_manager.connection_count().await,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
