//! Playlist pointer model.

use radio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// The singleton row of the `playlist` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlaylistPointer {
    pub id: DbId,
    /// Track currently on air; `None` until the first advance.
    pub current_track_id: Option<DbId>,
    pub last_updated: Timestamp,
}
