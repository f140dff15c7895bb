//! User CRUD handlers.
//!
//! Each handler validates its inputs through the extractors in
//! `request.rs`, performs exactly one store call, and returns. The store lock
//! is taken and released inside that call.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::http::request::{JsonBody, UserIdParam, UserIdQuery, UserPayload};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::store::User;

/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Option<UserPayload>>,
) -> (StatusCode, Json<User>) {
    let user = state.store.create(payload.unwrap_or_default().name);
    (StatusCode::CREATED, Json(user))
}

/// `GET /users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.store.get(id)?))
}

/// `GET /users?id={id}`
pub async fn get_user_by_query(
    State(state): State<AppState>,
    UserIdQuery(id): UserIdQuery,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.store.get(id)?))
}

/// `PUT /users/{id}`
pub async fn update_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
    JsonBody(payload): JsonBody<Option<UserPayload>>,
) -> Result<Json<User>, ApiError> {
    let name = payload.unwrap_or_default().name;
    Ok(Json(state.store.update(id, name)?))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub users: usize,
}

/// `GET /status`
pub async fn get_status(State(state): State<AppState>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        users: state.store.len(),
    })
}
