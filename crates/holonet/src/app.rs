use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        characters::{create_character, get_character, list_characters},
        favorites::{
            add_favorite_character, add_favorite_planet, delete_favorite_character,
            delete_favorite_planet, delete_favorite_user, get_favorite, list_favorites,
        },
        health::livez,
        planets::{create_planet, get_planet, list_planets},
        root::sitemap,
        users::{create_user, get_user, list_users},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(sitemap))
        .route("/livez", get(livez))
        // User routes
        .route("/user", get(list_users).post(create_user))
        .route("/user/{id}", get(get_user))
        .route("/user/{id}/favorites/planet", post(add_favorite_planet))
        .route("/user/{id}/favorites/character", post(add_favorite_character))
        // Planet routes
        .route("/planets", get(list_planets).post(create_planet))
        .route("/planets/{id}", get(get_planet))
        // Character routes
        .route("/character", get(list_characters).post(create_character))
        .route("/character/{id}", get(get_character))
        // Favorite routes
        .route("/favorites", get(list_favorites))
        .route("/favorites/{id}", get(get_favorite))
        .route("/favorites/user/{id}", delete(delete_favorite_user))
        .route("/favorites/planet/{id}", delete(delete_favorite_planet))
        .route("/favorites/character/{id}", delete(delete_favorite_character))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
