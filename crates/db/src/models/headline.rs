//! Headline entity model and DTOs.
//!
//! Headlines are append-only: there is no update payload.

use radio_core::error::CoreError;
use radio_core::types::{DbId, Timestamp};
use radio_core::validation::validate_input;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `headlines` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Headline {
    pub id: DbId,
    pub source: String,
    pub title: String,
    pub url: Option<String>,
    pub scraped_at: Timestamp,
}

/// Request payload for `POST /headlines`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateHeadline {
    #[validate(required, length(min = 1))]
    pub source: Option<String>,
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    pub url: Option<String>,
}

/// A validated headline ready for insertion.
#[derive(Debug, Clone)]
pub struct NewHeadline {
    pub source: String,
    pub title: String,
    pub url: Option<String>,
}

impl CreateHeadline {
    /// Validate required fields and convert into an insertable [`NewHeadline`].
    pub fn validated(self) -> Result<NewHeadline, CoreError> {
        validate_input(&self)?;
        Ok(NewHeadline {
            source: self.source.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            url: self.url,
        })
    }
}
