use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::{error::AppError, services::SessionToken};

/// HTTP header naming the caller's session
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// Session token supplied by the client
///
/// Rejects with [`AppError::Unauthenticated`] when the header is missing or
/// is not a UUID. Whether the token names a live session is checked against
/// the store by the handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientSession(pub SessionToken);

#[async_trait]
impl<S> FromRequestParts<S> for ClientSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(SESSION_TOKEN_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .map(ClientSession)
            .ok_or(AppError::Unauthenticated)
    }
}
