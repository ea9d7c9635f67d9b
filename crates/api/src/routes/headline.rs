//! Route definitions for news headlines. Mounted at `/headlines`.

use axum::routing::get;
use axum::Router;

use crate::handlers::headline;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(headline::list).post(headline::create))
}
