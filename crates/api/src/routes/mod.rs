pub mod headline;
pub mod health;
pub mod station;
pub mod stream;
pub mod track;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                                  WebSocket push channel
///
/// /current                             now playing (GET)
/// /listeners                           listener gauge (GET)
/// /next                                advance the playlist (POST)
///
/// /tracks                              list, create
/// /tracks/{id}/likes                   like count (GET)
/// /tracks/{id}/like                    like (POST)
/// /tracks/{id}/unlike                  unlike (POST)
///
/// /headlines                           list, create
///
/// /stream/{id}                         audio bytes (GET, Range aware)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // WebSocket push channel.
        .route("/ws", get(ws::ws_handler))
        // Now playing and playlist control.
        .merge(station::router())
        // Catalog and likes.
        .nest("/tracks", track::router())
        // News headlines.
        .nest("/headlines", headline::router())
        // Audio streaming.
        .nest("/stream", stream::router())
}
