use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use holonet_core::catalog::{Character, CreateCharacterRequest, RecordId};
use holonet_core::storage::RepositoryError;

use crate::handlers::{body::parse_body, error::RequestError, AppError};
use crate::state::AppState;

/// List all characters (GET /character).
pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<Character>>, AppError> {
    let characters = state.character_repo.list_characters().await?;
    if characters.is_empty() {
        return Err(RequestError::EmptyCollection.into());
    }
    Ok(Json(characters))
}

/// Get a single character by ID (GET /character/{id}).
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Character>, AppError> {
    let character = state
        .character_repo
        .get_character(id)
        .await?
        .ok_or_else(|| RepositoryError::not_found(Character::ENTITY, id))?;
    Ok(Json(character))
}

/// Create a new character (POST /character).
pub async fn create_character(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let request: CreateCharacterRequest = parse_body(&body)?;
    let character = state
        .character_repo
        .create_character(&request.into_new_character()?)
        .await?;

    tracing::info!(character_id = character.id, name = %character.name, "Created new character");

    Ok(Json(json!({
        "msg": "character created successfully",
        "id": character.id,
    })))
}
