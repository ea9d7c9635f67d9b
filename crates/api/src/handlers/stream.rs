//! Audio streaming for catalog tracks.
//!
//! Bytes are relayed through a [`ReaderStream`]; dropping the response body
//! (client disconnect) closes the file.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{self, HeaderMap};
use axum::http::StatusCode;
use axum::response::Response;
use radio_core::error::CoreError;
use radio_core::media::{audio_content_type, resolve_media_path, ByteRange};
use radio_core::types::DbId;
use radio_db::repositories::TrackRepo;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn audio_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "AudioFile",
        id,
    })
}

/// GET /api/v1/stream/{id}
///
/// Streams a track's audio file. Files without a known audio extension are
/// reported missing. A single `Range: bytes=START-END` is
/// answered with 206 (or 416 when it lies outside the file).
pub async fn stream_track(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let track = TrackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Track", id }))?;

    let path = resolve_media_path(&state.config.media_root, &track.file_path).ok_or_else(|| {
        tracing::debug!(track_id = id, file_path = %track.file_path, "Track file is not local");
        audio_not_found(id)
    })?;
    let content_type = audio_content_type(&track.file_path).ok_or_else(|| {
        tracing::warn!(track_id = id, file_path = %track.file_path, "Track file is not audio");
        audio_not_found(id)
    })?;

    let metadata = match tokio::fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => metadata,
        _ => {
            tracing::debug!(track_id = id, path = %path.display(), "Track file missing");
            return Err(audio_not_found(id));
        }
    };
    let file_size = metadata.len();

    let range_header = headers
        .get(header::RANGE)
        .map(|value| {
            value
                .to_str()
                .map_err(|_| AppError::BadRequest("Invalid Range header".into()))
        })
        .transpose()?;

    let mut file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let response = match ByteRange::from_header(range_header, file_size) {
        ByteRange::Full => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CONTENT_LENGTH, file_size.to_string())
            .header(header::ACCEPT_RANGES, "bytes")
            .body(Body::from_stream(ReaderStream::new(file))),
        ByteRange::Partial { start, end } => {
            let length = end - start + 1;
            file.seek(std::io::SeekFrom::Start(start))
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;

            Response::builder()
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_TYPE, content_type)
                .header(header::CONTENT_LENGTH, length.to_string())
                .header(
                    header::CONTENT_RANGE,
                    format!("bytes {start}-{end}/{file_size}"),
                )
                .header(header::ACCEPT_RANGES, "bytes")
                .body(Body::from_stream(ReaderStream::new(file.take(length))))
        }
        ByteRange::Unsatisfiable => Response::builder()
            .status(StatusCode::RANGE_NOT_SATISFIABLE)
            .header(header::CONTENT_RANGE, format!("bytes */{file_size}"))
            .body(Body::empty()),
    };

    response.map_err(|e| AppError::InternalError(e.to_string()))
}
