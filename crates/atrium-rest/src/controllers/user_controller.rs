//! User directory controller.

use crate::{
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use atrium_core::UserId;
use atrium_service::{CreateUserRequest, UpdateUserRequest, UserResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users.
async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");

    let response = state.user_service.list_users().await?;
    ok(response)
}

/// Get a user by ID.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", id);

    let response = state.user_service.get_user(&UserId::from(id)).await?;
    ok(response)
}

/// Create a new user.
async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    debug!("Create user request");

    let response = state.user_service.create_user(request).await?;
    Ok(created(response))
}

/// Update a user. The target id comes from the path; any id in the body is
/// ignored.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<UserResponse> {
    debug!("Update user request: {}", id);

    let response = state
        .user_service
        .update_user(&UserId::from(id), request)
        .await?;
    ok(response)
}

/// Delete a user, returning the removed record.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserResponse> {
    debug!("Delete user request: {}", id);

    let response = state.user_service.delete_user(&UserId::from(id)).await?;
    ok(response)
}
