//! Like entity model.

use radio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `likes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Like {
    pub id: DbId,
    pub track_id: DbId,
    /// Best-effort listener identity (client address).
    pub listener: String,
    pub created_at: Timestamp,
}
