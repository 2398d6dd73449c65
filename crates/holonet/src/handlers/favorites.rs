//! Favorite handlers.
//!
//! The three DELETE routes all remove the favorite whose own id matches the
//! path segment; the segment name (`user`, `planet`, `character`) only
//! changes the confirmation message.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use holonet_core::catalog::{
    AddFavoriteCharacterRequest, AddFavoritePlanetRequest, Favorite, NewFavorite, RecordId,
};
use holonet_core::storage::RepositoryError;

use crate::handlers::{body::parse_body, error::RequestError, AppError};
use crate::state::AppState;

/// List all favorites (GET /favorites).
pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<Favorite>>, AppError> {
    let favorites = state.favorite_repo.list_favorites().await?;
    if favorites.is_empty() {
        return Err(RequestError::EmptyCollection.into());
    }
    Ok(Json(favorites))
}

/// Get a single favorite by ID (GET /favorites/{id}).
pub async fn get_favorite(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Favorite>, AppError> {
    let favorite = state
        .favorite_repo
        .get_favorite(id)
        .await?
        .ok_or_else(|| RepositoryError::not_found(Favorite::ENTITY, id))?;
    Ok(Json(favorite))
}

/// Bookmark a planet for a user (POST /user/{id}/favorites/planet).
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(user_id): Path<RecordId>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let request: AddFavoritePlanetRequest = parse_body(&body)?;
    create(&state, request.into_new_favorite(user_id), "Planet").await
}

/// Bookmark a character for a user (POST /user/{id}/favorites/character).
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path(user_id): Path<RecordId>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let request: AddFavoriteCharacterRequest = parse_body(&body)?;
    create(&state, request.into_new_favorite(user_id), "Character").await
}

async fn create(
    state: &AppState,
    favorite: NewFavorite,
    label: &str,
) -> Result<Json<Value>, AppError> {
    let favorite = state.favorite_repo.create_favorite(&favorite).await?;

    tracing::info!(
        favorite_id = favorite.id,
        user_id = favorite.user_id,
        planet_id = ?favorite.planet_id,
        character_id = ?favorite.character_id,
        "Created new favorite"
    );

    Ok(Json(json!({
        "msg": format!("{label} added to favorites successfully"),
        "id": favorite.id,
    })))
}

/// DELETE /favorites/user/{id}
pub async fn delete_favorite_user(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Value>, AppError> {
    delete(&state, id, "user").await
}

/// DELETE /favorites/planet/{id}
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Value>, AppError> {
    delete(&state, id, "planet").await
}

/// DELETE /favorites/character/{id}
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Value>, AppError> {
    delete(&state, id, "character").await
}

async fn delete(state: &AppState, id: RecordId, label: &str) -> Result<Json<Value>, AppError> {
    state.favorite_repo.delete_favorite(id).await?;

    tracing::info!(favorite_id = id, route = label, "Deleted favorite");

    Ok(Json(json!({
        "msg": format!("Favorite {label} deleted successfully"),
    })))
}
