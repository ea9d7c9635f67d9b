//! Shared response bodies for API handlers.
//!
//! The station's client contract uses small flat JSON objects rather than
//! a `{ "data": ... }` envelope; the shapes live here so handlers and tests
//! agree on field names.

use radio_core::types::DbId;
use radio_db::models::track::TrackWithLikes;
use serde::Serialize;

/// `{ "success": true }`
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Result of a like or unlike: `{ "success": true, "likes": N }`.
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    pub likes: i64,
}

/// Per-track like count: `{ "track_id": 1, "likes": N }`.
#[derive(Debug, Serialize)]
pub struct LikeCountResponse {
    pub track_id: DbId,
    pub likes: i64,
}

/// Now-playing snapshot returned by `GET /current`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentResponse {
    /// Track on air with its like count; `null` while the catalog is empty.
    pub track: Option<TrackWithLikes>,
    pub listener_count: usize,
    pub is_playing: bool,
}

/// Track returned by `POST /next`: `{ "track": {...} }`.
#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    pub track: TrackWithLikes,
}

/// Summary returned by `POST /tracks`.
#[derive(Debug, Serialize)]
pub struct CreatedTrackResponse {
    pub id: DbId,
    pub title: String,
    pub mood: String,
}

/// `{ "count": N }` for `GET /listeners`.
#[derive(Debug, Serialize)]
pub struct ListenerCountResponse {
    pub count: usize,
}
