//! Error responses.
//!
//! # Responsibilities
//! - Define the client-facing error taxonomy
//! - Map each error to its HTTP status
//! - Render errors as `{"error": "<message>"}`
//!
//! # Design Decisions
//! - Errors stop at the handler boundary; nothing here is fatal
//! - Rejections are logged at debug, since they are client mistakes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Errors a handler can answer with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing, malformed, or wrongly shaped JSON body.
    #[error("Invalid input")]
    InvalidInput,

    /// Id that is not a base-10 integer >= 1.
    #[error("Invalid user ID")]
    InvalidUserId,

    #[error("User not found")]
    NotFound,

    #[error("Request body too large")]
    BodyTooLarge,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput | ApiError::InvalidUserId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, error = %self, "Request rejected");
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::UserId;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidUserId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::BodyTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err: ApiError = StoreError::NotFound(UserId::new(4).unwrap()).into();
        assert_eq!(err, ApiError::NotFound);
    }

    #[tokio::test]
    async fn test_error_body_is_json() {
        let response = ApiError::InvalidUserId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Invalid user ID" }));
    }
}
