//! Handlers for the `/tracks` resource and its likes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use radio_core::error::CoreError;
use radio_core::types::DbId;
use radio_db::models::track::{CreateTrack, Track};
use radio_db::repositories::like_repo::is_unique_violation;
use radio_db::repositories::{LikeRepo, TrackRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, ListenerIdentity};
use crate::query::LimitParams;
use crate::response::{CreatedTrackResponse, LikeCountResponse, LikeResponse};
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// GET /api/v1/tracks?limit=N
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<Track>>> {
    let limit = radio_db::clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let tracks = TrackRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(tracks))
}

/// POST /api/v1/tracks
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTrack>,
) -> AppResult<(StatusCode, Json<CreatedTrackResponse>)> {
    let new_track = input.validated()?;
    let track = TrackRepo::create(&state.pool, &new_track).await?;
    tracing::info!(track_id = track.id, title = %track.title, "Track added to catalog");

    Ok((
        StatusCode::CREATED,
        Json(CreatedTrackResponse {
            id: track.id,
            title: track.title,
            mood: track.mood,
        }),
    ))
}

/// GET /api/v1/tracks/{id}/likes
pub async fn likes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LikeCountResponse>> {
    ensure_track_exists(&state, id).await?;
    let likes = LikeRepo::count_for_track(&state.pool, id).await?;
    Ok(Json(LikeCountResponse {
        track_id: id,
        likes,
    }))
}

/// POST /api/v1/tracks/{id}/like
///
/// One like per listener per track; a repeat is a conflict.
pub async fn like(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    listener: ListenerIdentity,
) -> AppResult<Json<LikeResponse>> {
    ensure_track_exists(&state, id).await?;

    match LikeRepo::create(&state.pool, id, listener.as_str()).await {
        Ok(_) => {}
        Err(e) if is_unique_violation(&e) => {
            return Err(CoreError::AlreadyLiked { track_id: id }.into());
        }
        Err(e) => return Err(e.into()),
    }

    let likes = LikeRepo::count_for_track(&state.pool, id).await?;
    tracing::debug!(track_id = id, likes, "Track liked");
    Ok(Json(LikeResponse {
        success: true,
        likes,
    }))
}

/// POST /api/v1/tracks/{id}/unlike
///
/// Idempotent: removing a like that does not exist still succeeds.
pub async fn unlike(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    listener: ListenerIdentity,
) -> AppResult<Json<LikeResponse>> {
    ensure_track_exists(&state, id).await?;

    let removed = LikeRepo::delete(&state.pool, id, listener.as_str()).await?;
    let likes = LikeRepo::count_for_track(&state.pool, id).await?;
    tracing::debug!(track_id = id, removed, likes, "Track unliked");
    Ok(Json(LikeResponse {
        success: true,
        likes,
    }))
}

async fn ensure_track_exists(state: &AppState, id: DbId) -> AppResult<Track> {
    TrackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Track", id }))
}
