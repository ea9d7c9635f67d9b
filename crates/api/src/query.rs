//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameter (`?limit=`).
///
/// Values are clamped in the handler via `radio_db::clamp_limit`.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
