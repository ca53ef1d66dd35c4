// User handlers
// HTTP handlers for user management operations

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    Json,
};
use tracing::info;

use crate::{
    error::ApiError,
    models::user::CreateUserRequest,
    response::respond_with_json,
    state::AppState,
};

/// Create a new user
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    info!("Creating new user with email: {}", request.email);

    let user = state.store.create_user(request.email).await?;

    info!("Successfully created user with id: {}", user.id);
    Ok(respond_with_json(StatusCode::CREATED, &user))
}
