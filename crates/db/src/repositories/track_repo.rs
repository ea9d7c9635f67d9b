//! Repository for the `tracks` table.

use radio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::track::{NewTrack, Track, TrackWithLikes};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, mood, headline, external_id, file_path, duration, created_at";

/// Column list for [`TrackWithLikes`], with the like count aggregated per row.
pub(crate) const COLUMNS_WITH_LIKES: &str = "t.id, t.title, t.mood, t.headline, t.external_id, \
     t.file_path, t.duration, t.created_at, \
     (SELECT COUNT(*) FROM likes l WHERE l.track_id = t.id) AS likes";

/// Provides catalog operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &NewTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (title, mood, headline, external_id, file_path, duration) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.title)
            .bind(&input.mood)
            .bind(&input.headline)
            .bind(&input.external_id)
            .bind(&input.file_path)
            .bind(input.duration)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = ?");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a track by ID together with its like count.
    pub async fn find_with_likes(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<TrackWithLikes>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS_WITH_LIKES} FROM tracks t WHERE t.id = ?");
        sqlx::query_as::<_, TrackWithLikes>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the most recently created tracks, newest first.
    pub async fn list_recent(pool: &SqlitePool, limit: i64) -> Result<Vec<Track>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tracks ORDER BY created_at DESC, id DESC LIMIT ?");
        sqlx::query_as::<_, Track>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// All track ids in ascending order (the rotation order).
    pub async fn list_ids(pool: &SqlitePool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM tracks ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
