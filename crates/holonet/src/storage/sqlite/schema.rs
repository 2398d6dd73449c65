//! SQL query constants.
//!
//! Table definitions live in the versioned migration scripts; this module
//! only holds the statements the repository runs against them.

/// Pragmas applied to every new connection.
pub const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO "user" (email, password)
VALUES (?1, ?2)
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, email, password
FROM "user"
WHERE id = ?1
"#;

pub const SELECT_USERS: &str = r#"
SELECT id, email, password
FROM "user"
ORDER BY id ASC
"#;

pub const USER_EXISTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM "user" WHERE id = ?1)
"#;

// Planet queries
pub const INSERT_PLANET: &str = r#"
INSERT INTO planets (name, gravity, population, diameter, rotation_period)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_PLANET_BY_ID: &str = r#"
SELECT id, name, gravity, population, diameter, rotation_period
FROM planets
WHERE id = ?1
"#;

pub const SELECT_PLANETS: &str = r#"
SELECT id, name, gravity, population, diameter, rotation_period
FROM planets
ORDER BY id ASC
"#;

pub const PLANET_EXISTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM planets WHERE id = ?1)
"#;

// Character queries
pub const INSERT_CHARACTER: &str = r#"
INSERT INTO "character" (name, gender, height, eyes_color, hair_color)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_CHARACTER_BY_ID: &str = r#"
SELECT id, name, gender, height, eyes_color, hair_color
FROM "character"
WHERE id = ?1
"#;

pub const SELECT_CHARACTERS: &str = r#"
SELECT id, name, gender, height, eyes_color, hair_color
FROM "character"
ORDER BY id ASC
"#;

pub const CHARACTER_EXISTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM "character" WHERE id = ?1)
"#;

// Favorite queries
pub const INSERT_FAVORITE: &str = r#"
INSERT INTO favorites (user_id, character_id, planet_id)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_FAVORITE_BY_ID: &str = r#"
SELECT id, user_id, character_id, planet_id
FROM favorites
WHERE id = ?1
"#;

pub const SELECT_FAVORITES: &str = r#"
SELECT id, user_id, character_id, planet_id
FROM favorites
ORDER BY id ASC
"#;

pub const DELETE_FAVORITE: &str = r#"
DELETE FROM favorites
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_contain_expected_keywords() {
        // User queries
        assert!(INSERT_USER.contains("INSERT"));
        assert!(SELECT_USER_BY_ID.contains("WHERE id"));
        assert!(SELECT_USERS.contains("ORDER BY id"));
        assert!(USER_EXISTS.contains("EXISTS"));

        // Planet queries
        assert!(INSERT_PLANET.contains("rotation_period"));
        assert!(SELECT_PLANETS.contains("ORDER BY id"));
        assert!(PLANET_EXISTS.contains("EXISTS"));

        // Character queries
        assert!(INSERT_CHARACTER.contains("eyes_color"));
        assert!(SELECT_CHARACTERS.contains("ORDER BY id"));
        assert!(CHARACTER_EXISTS.contains("EXISTS"));

        // Favorite queries
        assert!(INSERT_FAVORITE.contains("INSERT"));
        assert!(SELECT_FAVORITES.contains("ORDER BY id"));
        assert!(DELETE_FAVORITE.contains("DELETE"));
    }
}
