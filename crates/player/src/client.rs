//! HTTP and push-channel client for the station.
//!
//! [`StationClient`] wraps the REST endpoints with [`reqwest`] and opens the
//! WebSocket push channel with `tokio-tungstenite`. Push frames are parsed
//! into [`PushMessage`] by [`parse_push_message`].

use radio_core::types::DbId;
use serde::Deserialize;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::track::Track;

/// Live push-channel connection.
pub type PushStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Messages pushed by the station.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum PushMessage {
    TrackChanged(Track),
    ListenerCount(usize),
}

/// Parse a push-channel text frame.
///
/// Returns `Err` for malformed JSON or unknown `event` values; callers
/// should log and continue.
pub fn parse_push_message(text: &str) -> Result<PushMessage, serde_json::Error> {
    serde_json::from_str(text)
}

/// Body of `GET /api/v1/current`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSnapshot {
    pub track: Option<Track>,
    pub listener_count: usize,
    pub is_playing: bool,
}

#[derive(Debug, Deserialize)]
struct AdvanceBody {
    track: Track,
}

#[derive(Debug, Deserialize)]
struct LikeBody {
    likes: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    error: String,
}

/// Errors from talking to the station.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The station answered with a non-2xx status.
    #[error("Station API error ({status}, {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Failed to open the push channel.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The push channel broke after it was established.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl ClientError {
    /// Whether the station rejected a like because it already exists.
    pub fn is_already_liked(&self) -> bool {
        matches!(self, Self::Api { code, .. } if code == "ALREADY_LIKED")
    }
}

/// Client for one station.
pub struct StationClient {
    http: reqwest::Client,
    base_url: String,
}

impl StationClient {
    /// * `base_url` - HTTP base URL, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Prefix for track audio URLs (`{base}/api/v1/stream`).
    pub fn stream_base(&self) -> String {
        format!("{}/api/v1/stream", self.base_url)
    }

    /// WebSocket URL of the push channel.
    pub fn push_url(&self) -> String {
        let ws_base = if let Some(rest) = self.base_url.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = self.base_url.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            self.base_url.clone()
        };
        format!("{ws_base}/api/v1/ws")
    }

    /// `GET /api/v1/current`
    pub async fn current(&self) -> Result<CurrentSnapshot, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/v1/current", self.base_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /api/v1/next`: ask the station to advance; returns the new track.
    pub async fn advance(&self) -> Result<Track, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/v1/next", self.base_url))
            .send()
            .await?;
        let body: AdvanceBody = Self::parse_response(response).await?;
        Ok(body.track)
    }

    /// `POST /api/v1/tracks/{id}/like`; returns the new like count.
    pub async fn like(&self, track_id: DbId) -> Result<i64, ClientError> {
        self.post_like(track_id, "like").await
    }

    /// `POST /api/v1/tracks/{id}/unlike`; returns the new like count.
    pub async fn unlike(&self, track_id: DbId) -> Result<i64, ClientError> {
        self.post_like(track_id, "unlike").await
    }

    /// Open the push channel.
    pub async fn connect_push(&self) -> Result<PushStream, ClientError> {
        let url = self.push_url();
        let (stream, _response) = connect_async(&url)
            .await
            .map_err(|e| ClientError::Connection(format!("Failed to connect to {url}: {e}")))?;
        tracing::info!(url = %url, "Push channel connected");
        Ok(stream)
    }

    // ---- private helpers ----

    async fn post_like(&self, track_id: DbId, action: &str) -> Result<i64, ClientError> {
        let response = self
            .http
            .post(format!(
                "{}/api/v1/tracks/{track_id}/{action}",
                self.base_url
            ))
            .send()
            .await?;
        let body: LikeBody = Self::parse_response(response).await?;
        Ok(body.likes)
    }

    /// Decode a 2xx JSON body, or turn an error response into
    /// [`ClientError::Api`].
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let body: ErrorBody = serde_json::from_str(&text).unwrap_or(ErrorBody {
            code: String::new(),
            error: text,
        });
        Err(ClientError::Api {
            status: status.as_u16(),
            code: body.code,
            message: body.error,
        })
    }
}
