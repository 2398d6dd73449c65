use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use holonet_core::catalog::{CreateUserRequest, RecordId, User};
use holonet_core::storage::RepositoryError;

use crate::handlers::{body::parse_body, error::RequestError, AppError};
use crate::state::AppState;

/// List all users (GET /user).
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.user_repo.list_users().await?;
    if users.is_empty() {
        return Err(RequestError::EmptyCollection.into());
    }
    Ok(Json(users))
}

/// Get a single user by ID (GET /user/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<User>, AppError> {
    let user = state
        .user_repo
        .get_user(id)
        .await?
        .ok_or_else(|| RepositoryError::not_found(User::ENTITY, id))?;
    Ok(Json(user))
}

/// Create a new user (POST /user).
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let request: CreateUserRequest = parse_body(&body)?;
    let user = state.user_repo.create_user(&request.into_new_user()?).await?;

    tracing::info!(user_id = user.id, email = %user.email, "Created new user");

    Ok(Json(json!({
        "msg": "user created successfully",
        "id": user.id,
    })))
}
