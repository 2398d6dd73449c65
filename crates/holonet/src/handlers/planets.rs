use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use holonet_core::catalog::{CreatePlanetRequest, Planet, RecordId};
use holonet_core::storage::RepositoryError;

use crate::handlers::{body::parse_body, error::RequestError, AppError};
use crate::state::AppState;

/// List all planets (GET /planets).
pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<Planet>>, AppError> {
    let planets = state.planet_repo.list_planets().await?;
    if planets.is_empty() {
        return Err(RequestError::EmptyCollection.into());
    }
    Ok(Json(planets))
}

/// Get a single planet by ID (GET /planets/{id}).
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Planet>, AppError> {
    let planet = state
        .planet_repo
        .get_planet(id)
        .await?
        .ok_or_else(|| RepositoryError::not_found(Planet::ENTITY, id))?;
    Ok(Json(planet))
}

/// Create a new planet (POST /planets).
pub async fn create_planet(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let request: CreatePlanetRequest = parse_body(&body)?;
    let planet = state
        .planet_repo
        .create_planet(&request.into_new_planet()?)
        .await?;

    tracing::info!(planet_id = planet.id, name = %planet.name, "Created new planet");

    Ok(Json(json!({
        "msg": "planets created successfully",
        "id": planet.id,
    })))
}
