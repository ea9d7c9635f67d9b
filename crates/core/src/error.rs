use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Track {track_id} already liked by this listener")]
    AlreadyLiked { track_id: DbId },

    #[error("No tracks in catalog")]
    EmptyCatalog,
}
