//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows into domain types. Column order
//! must match the SELECT statements in `schema`.

use holonet_core::catalog::{Character, Favorite, Planet, User};
use rusqlite::Row;

/// Convert a SQLite row to a User.
///
/// Expected columns: id, email, password
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        password: row.get(2)?,
    })
}

/// Convert a SQLite row to a Planet.
///
/// Expected columns: id, name, gravity, population, diameter, rotation_period
pub fn row_to_planet(row: &Row) -> rusqlite::Result<Planet> {
    Ok(Planet {
        id: row.get(0)?,
        name: row.get(1)?,
        gravity: row.get(2)?,
        population: row.get(3)?,
        diameter: row.get(4)?,
        rotation_period: row.get(5)?,
    })
}

/// Convert a SQLite row to a Character.
///
/// Expected columns: id, name, gender, height, eyes_color, hair_color
pub fn row_to_character(row: &Row) -> rusqlite::Result<Character> {
    Ok(Character {
        id: row.get(0)?,
        name: row.get(1)?,
        gender: row.get(2)?,
        height: row.get(3)?,
        eyes_color: row.get(4)?,
        hair_color: row.get(5)?,
    })
}

/// Convert a SQLite row to a Favorite.
///
/// Expected columns: id, user_id, character_id, planet_id
pub fn row_to_favorite(row: &Row) -> rusqlite::Result<Favorite> {
    Ok(Favorite {
        id: row.get(0)?,
        user_id: row.get(1)?,
        character_id: row.get(2)?,
        planet_id: row.get(3)?,
    })
}
