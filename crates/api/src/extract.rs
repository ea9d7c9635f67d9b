//! Request extractors: best-effort listener identity and JSON bodies that
//! reject with [`AppError`].

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequest, FromRequestParts};
use axum::http::request::Parts;

use crate::error::AppError;

/// `axum::Json` whose rejections become `VALIDATION_ERROR` responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Identity used when no address information is available at all.
pub const ANONYMOUS_LISTENER: &str = "anonymous";

/// Who is liking a track, as far as the server can tell.
///
/// Resolution order: first entry of `X-Forwarded-For`, then `X-Real-IP`,
/// then the peer address from [`ConnectInfo`]. This is not authentication;
/// it only keeps one like per address per track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerIdentity(pub String);

impl ListenerIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for ListenerIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let forwarded = header("x-forwarded-for")
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        let identity = forwarded
            .or_else(|| header("x-real-ip"))
            .map(str::to_string)
            .or_else(|| {
                parts
                    .extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip().to_string())
            })
            .unwrap_or_else(|| ANONYMOUS_LISTENER.to_string());

        Ok(ListenerIdentity(identity))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn identity_of(request: Request<()>) -> String {
        let (mut parts, _) = request.into_parts();
        ListenerIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap()
            .0
    }

    #[tokio::test]
    async fn forwarded_for_first_hop_wins() {
        let request = Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .header("x-real-ip", "198.51.100.2")
            .body(())
            .unwrap();
        assert_eq!(identity_of(request).await, "203.0.113.7");
    }

    #[tokio::test]
    async fn real_ip_is_second_choice() {
        let request = Request::builder()
            .header("x-real-ip", "198.51.100.2")
            .body(())
            .unwrap();
        assert_eq!(identity_of(request).await, "198.51.100.2");
    }

    #[tokio::test]
    async fn peer_address_is_used_without_headers() {
        let mut request = Request::builder().body(()).unwrap();
        let addr: SocketAddr = "192.0.2.10:51234".parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));
        assert_eq!(identity_of(request).await, "192.0.2.10");
    }

    #[tokio::test]
    async fn falls_back_to_anonymous() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(identity_of(request).await, ANONYMOUS_LISTENER);
    }
}
