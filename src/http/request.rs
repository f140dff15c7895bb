//! Request extraction.
//!
//! # Responsibilities
//! - Parse the user id from the path or the `id` query parameter
//! - Decode JSON request bodies without requiring a Content-Type header
//! - Turn every extraction failure into an [`ApiError`]
//!
//! # Design Decisions
//! - Ids are parsed from strings here rather than by axum's typed `Path`, so
//!   bad ids always produce the same "Invalid user ID" body
//! - Extractors that read parts run before the body extractor, so a bad id
//!   is reported even when the body is also bad

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{request::Parts, StatusCode},
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::http::response::ApiError;
use crate::store::UserId;

/// Body accepted by create and update.
///
/// Unknown fields (including a client-sent `id`) are ignored. Handlers take it
/// as `Option<UserPayload>` so a bare `null` body reads as the empty payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse().map_err(|e| {
        tracing::debug!(raw = %raw, error = %e, "Rejected user id");
        ApiError::InvalidUserId
    })
}

/// User id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct UserIdParam(pub UserId);

impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidUserId)?;
        parse_user_id(&raw).map(Self)
    }
}

/// User id taken from the `?id=` query parameter.
///
/// When the key is repeated, the first value wins.
#[derive(Debug, Clone, Copy)]
pub struct UserIdQuery(pub UserId);

impl<S> FromRequestParts<S> for UserIdQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidUserId)?;
        let raw = pairs
            .iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.as_str())
            .unwrap_or_default();
        parse_user_id(raw).map(Self)
    }
}

/// JSON body extractor that rejects with [`ApiError::InvalidInput`].
///
/// Unlike `axum::Json` it does not insist on `Content-Type: application/json`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::BodyTooLarge
            } else {
                ApiError::InvalidInput
            }
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            ApiError::InvalidInput
        })
    }
}
