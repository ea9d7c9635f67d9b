//! Repository for the `likes` table.
//!
//! Uniqueness of `(track_id, listener)` is enforced by the
//! `uq_likes_track_listener` constraint; callers detect duplicates through
//! [`is_unique_violation`].

use radio_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::like::Like;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, track_id, listener, created_at";

/// Provides like/unlike operations.
pub struct LikeRepo;

impl LikeRepo {
    /// Record a like. Fails with a unique violation if the listener already
    /// likes the track.
    pub async fn create(
        pool: &SqlitePool,
        track_id: DbId,
        listener: &str,
    ) -> Result<Like, sqlx::Error> {
        let query = format!(
            "INSERT INTO likes (track_id, listener) VALUES (?, ?) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Like>(&query)
            .bind(track_id)
            .bind(listener)
            .fetch_one(pool)
            .await
    }

    /// Remove a like. Returns `false` when there was nothing to remove.
    pub async fn delete(
        pool: &SqlitePool,
        track_id: DbId,
        listener: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM likes WHERE track_id = ? AND listener = ?")
            .bind(track_id)
            .bind(listener)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of likes recorded for a track.
    pub async fn count_for_track(pool: &SqlitePool, track_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE track_id = ?")
            .bind(track_id)
            .fetch_one(pool)
            .await
    }
}

/// Whether a sqlx error is a unique constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
