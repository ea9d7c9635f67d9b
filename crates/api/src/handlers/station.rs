//! Handlers for the now-playing surface.

use axum::extract::State;
use axum::Json;
use radio_db::repositories::PlaylistRepo;

use crate::error::AppResult;
use crate::response::{AdvanceResponse, CurrentResponse, ListenerCountResponse};
use crate::state::AppState;
use crate::station;

/// GET /api/v1/current
pub async fn current(State(state): State<AppState>) -> AppResult<Json<CurrentResponse>> {
    let track = PlaylistRepo::current_track(&state.pool).await?;
    let is_playing = track.is_some();

    Ok(Json(CurrentResponse {
        track,
        listener_count: state.listeners.get(),
        is_playing,
    }))
}

/// GET /api/v1/listeners
pub async fn listeners(State(state): State<AppState>) -> Json<ListenerCountResponse> {
    Json(ListenerCountResponse {
        count: state.listeners.get(),
    })
}

/// POST /api/v1/next
///
/// Advances the playlist and announces the new track to every listener.
pub async fn next(State(state): State<AppState>) -> AppResult<Json<AdvanceResponse>> {
    let track = station::advance(&state).await?;
    Ok(Json(AdvanceResponse { track }))
}
