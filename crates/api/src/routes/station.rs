//! Route definitions for the now-playing surface.
//!
//! Merged directly into `/api/v1`.
//!
//! ```text
//! GET  /current                        current
//! GET  /listeners                      listeners
//! POST /next                           next
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::station;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/current", get(station::current))
        .route("/listeners", get(station::listeners))
        .route("/next", post(station::next))
}
