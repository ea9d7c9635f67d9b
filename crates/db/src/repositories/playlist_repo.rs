//! Repository for the singleton `playlist` pointer.
//!
//! [`PlaylistRepo::advance`] is the only code path that writes the pointer.

use radio_core::playlist::{effective_current_id, next_track_id};
use radio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::playlist::PlaylistPointer;
use crate::models::track::TrackWithLikes;
use crate::repositories::track_repo::{TrackRepo, COLUMNS_WITH_LIKES};

/// Primary key of the only playlist row.
const POINTER_ID: DbId = 1;

/// Provides access to the now-playing pointer.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Load the pointer row.
    pub async fn get_pointer(pool: &SqlitePool) -> Result<PlaylistPointer, sqlx::Error> {
        sqlx::query_as::<_, PlaylistPointer>(
            "SELECT id, current_track_id, last_updated FROM playlist WHERE id = ?",
        )
        .bind(POINTER_ID)
        .fetch_one(pool)
        .await
    }

    /// The track currently on air, with its like count.
    ///
    /// A NULL or dangling pointer reports the first track in rotation order
    /// without moving the pointer. Returns `None` when the catalog is empty.
    pub async fn current_track(pool: &SqlitePool) -> Result<Option<TrackWithLikes>, sqlx::Error> {
        let pointer = Self::get_pointer(pool).await?;
        let ids = TrackRepo::list_ids(pool).await?;

        match effective_current_id(&ids, pointer.current_track_id) {
            Some(id) => TrackRepo::find_with_likes(pool, id).await,
            None => Ok(None),
        }
    }

    /// Move the pointer to the next track in rotation and return that track.
    ///
    /// The read of the current pointer and catalog, and the write of the new
    /// pointer, happen in one transaction that first takes the write lock,
    /// so two concurrent advances never select from the same stale pointer.
    ///
    /// Returns `None` (pointer untouched) when the catalog is empty.
    pub async fn advance(pool: &SqlitePool) -> Result<Option<TrackWithLikes>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Take the write lock before reading.
        sqlx::query("UPDATE playlist SET last_updated = last_updated WHERE id = ?")
            .bind(POINTER_ID)
            .execute(&mut *tx)
            .await?;

        let current: Option<DbId> =
            sqlx::query_scalar("SELECT current_track_id FROM playlist WHERE id = ?")
                .bind(POINTER_ID)
                .fetch_one(&mut *tx)
                .await?;

        let ids: Vec<DbId> = sqlx::query_scalar("SELECT id FROM tracks ORDER BY id")
            .fetch_all(&mut *tx)
            .await?;

        let Some(next_id) = next_track_id(&ids, current) else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(
            "UPDATE playlist \
             SET current_track_id = ?, \
                 last_updated = strftime('%Y-%m-%dT%H:%M:%fZ', 'now') \
             WHERE id = ?",
        )
        .bind(next_id)
        .bind(POINTER_ID)
        .execute(&mut *tx)
        .await?;

        let query = format!("SELECT {COLUMNS_WITH_LIKES} FROM tracks t WHERE t.id = ?");
        let track = sqlx::query_as::<_, TrackWithLikes>(&query)
            .bind(next_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(from = ?current, to = next_id, "Playlist pointer advanced");
        Ok(Some(track))
    }
}
