use axum::routing::get;
use axum::Router;

use crate::handlers::stream;
use crate::state::AppState;

/// Audio streaming, mounted at `/stream`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(stream::stream_track))
}
