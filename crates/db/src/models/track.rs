//! Track entity model and DTOs.

use radio_core::error::CoreError;
use radio_core::types::{DbId, Timestamp};
use radio_core::validation::validate_input;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `tracks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Track {
    pub id: DbId,
    pub title: String,
    pub mood: String,
    /// Headline that inspired the track, if any.
    pub headline: Option<String>,
    /// Identifier assigned by the external generator.
    pub external_id: Option<String>,
    /// Catalog-relative path or external URL of the audio file.
    pub file_path: String,
    /// Length in seconds, when known.
    pub duration: Option<i64>,
    pub created_at: Timestamp,
}

/// A track together with its aggregate like count.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TrackWithLikes {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub track: Track,
    pub likes: i64,
}

/// Request payload for `POST /tracks`.
///
/// Every field is optional at the type level so that missing fields are
/// reported together by validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTrack {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub mood: Option<String>,
    pub headline: Option<String>,
    #[serde(alias = "suno_id")]
    pub external_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub file_path: Option<String>,
    pub duration: Option<i64>,
}

/// A validated track ready for insertion.
#[derive(Debug, Clone)]
pub struct NewTrack {
    pub title: String,
    pub mood: String,
    pub headline: Option<String>,
    pub external_id: Option<String>,
    pub file_path: String,
    pub duration: Option<i64>,
}

impl CreateTrack {
    /// Validate required fields and convert into an insertable [`NewTrack`].
    pub fn validated(self) -> Result<NewTrack, CoreError> {
        validate_input(&self)?;
        Ok(NewTrack {
            title: self.title.unwrap_or_default(),
            mood: self.mood.unwrap_or_default(),
            headline: self.headline,
            external_id: self.external_id,
            file_path: self.file_path.unwrap_or_default(),
            duration: self.duration,
        })
    }
}
