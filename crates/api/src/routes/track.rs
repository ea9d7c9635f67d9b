//! Route definitions for the track catalog.
//!
//! Mounted at `/tracks`.
//!
//! ```text
//! GET  /                               list (?limit)
//! POST /                               create
//! GET  /{id}/likes                     likes
//! POST /{id}/like                      like
//! POST /{id}/unlike                    unlike
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::track;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(track::list).post(track::create))
        .route("/{id}/likes", get(track::likes))
        .route("/{id}/like", post(track::like))
        .route("/{id}/unlike", post(track::unlike))
}
