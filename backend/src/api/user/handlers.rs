//! Handler functions for user management API endpoints.
//!
//! These functions receive the authenticated caller from the request
//! extensions, delegate to the `UserService` held in `AppState`, and shape
//! the HTTP response.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use super::models::{UserCreateRequest, UserResponse};
use crate::auth::AuthContext;
use crate::errors::ApiError;
use crate::AppState;

/// `POST /api/users`
pub async fn create_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthContext>,
    Json(request): Json<UserCreateRequest>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(
        caller = %caller.username(),
        username = %request.username,
        "creating user"
    );

    state.users.create_user(request).await?;
    Ok(StatusCode::OK)
}

/// `GET /api/users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    tracing::debug!(caller = %caller.username(), user_id = %id, "fetching user");

    let user = state.users.get_user_by_id(id).await?;
    Ok(Json(user))
}

/// `GET /api/users/hello`: echoes the caller's username as plain text.
pub async fn hello(Extension(caller): Extension<AuthContext>) -> String {
    caller.username().to_string()
}
