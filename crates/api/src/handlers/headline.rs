//! Handlers for the `/headlines` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use radio_db::models::headline::{CreateHeadline, Headline};
use radio_db::repositories::HeadlineRepo;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::query::LimitParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 5;
const MAX_LIMIT: i64 = 100;

/// GET /api/v1/headlines?limit=N
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<Headline>>> {
    let limit = radio_db::clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let headlines = HeadlineRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(headlines))
}

/// POST /api/v1/headlines
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateHeadline>,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    let new_headline = input.validated()?;
    let headline = HeadlineRepo::create(&state.pool, &new_headline).await?;
    tracing::debug!(headline_id = headline.id, source = %headline.source, "Headline stored");
    Ok((StatusCode::CREATED, Json(SuccessResponse::ok())))
}
