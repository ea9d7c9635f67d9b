//! Track as seen by a listener.

use radio_core::types::DbId;
use serde::Deserialize;

/// A catalog track with its like count, as served by `/current`, `/next`
/// and the `trackChanged` push event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    pub id: DbId,
    pub title: String,
    pub mood: String,
    #[serde(default)]
    pub headline: Option<String>,
    pub file_path: String,
    /// Length in seconds, when the catalog knows it.
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub likes: i64,
}
