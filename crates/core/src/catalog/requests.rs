//! API request types for catalog operations.
//!
//! Every route that accepts a body deserializes into one of these types, so
//! a missing or mistyped field is rejected before any storage access. The
//! `into_*` conversions then check the field contents.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::operations::validate_field;
use super::types::{NewCharacter, NewFavorite, NewPlanet, NewUser, RecordId};
use crate::serde::deserialize_trimmed_string;

/// Request payload for creating a user (POST /user).
#[derive(Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl CreateUserRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validates the request and converts it into an insertable user.
    pub fn into_new_user(self) -> Result<NewUser, ValidationError> {
        validate_field("email", &self.email)?;
        validate_field("password", &self.password)?;
        Ok(NewUser::new(self.email, self.password))
    }
}

/// Request payload for creating a planet (POST /planets).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanetRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub gravity: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub population: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub diameter: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub rotation_period: String,
}

impl CreatePlanetRequest {
    /// Validates the request and converts it into an insertable planet.
    pub fn into_new_planet(self) -> Result<NewPlanet, ValidationError> {
        validate_field("name", &self.name)?;
        validate_field("gravity", &self.gravity)?;
        validate_field("population", &self.population)?;
        validate_field("diameter", &self.diameter)?;
        validate_field("rotation_period", &self.rotation_period)?;

        Ok(NewPlanet {
            name: self.name,
            gravity: self.gravity,
            population: self.population,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
        })
    }
}

/// Request payload for creating a character (POST /character).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCharacterRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub gender: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub height: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub eyes_color: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub hair_color: String,
}

impl CreateCharacterRequest {
    /// Validates the request and converts it into an insertable character.
    pub fn into_new_character(self) -> Result<NewCharacter, ValidationError> {
        validate_field("name", &self.name)?;
        validate_field("gender", &self.gender)?;
        validate_field("height", &self.height)?;
        validate_field("eyes_color", &self.eyes_color)?;
        validate_field("hair_color", &self.hair_color)?;

        Ok(NewCharacter {
            name: self.name,
            gender: self.gender,
            height: self.height,
            eyes_color: self.eyes_color,
            hair_color: self.hair_color,
        })
    }
}

/// Request payload for bookmarking a planet (POST /user/{id}/favorites/planet).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddFavoritePlanetRequest {
    pub planet_id: RecordId,
}

impl AddFavoritePlanetRequest {
    pub fn into_new_favorite(self, user_id: RecordId) -> NewFavorite {
        NewFavorite::planet(user_id, self.planet_id)
    }
}

/// Request payload for bookmarking a character (POST /user/{id}/favorites/character).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddFavoriteCharacterRequest {
    pub character_id: RecordId,
}

impl AddFavoriteCharacterRequest {
    pub fn into_new_favorite(self, user_id: RecordId) -> NewFavorite {
        NewFavorite::character(user_id, self.character_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_into_new_user() {
        let new_user = CreateUserRequest::new("luke@rebellion.org", "x-wing")
            .into_new_user()
            .unwrap();

        assert_eq!(new_user.email, "luke@rebellion.org");
        assert_eq!(new_user.password, "x-wing");
    }

    #[test]
    fn test_create_user_request_trims_email() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"email": "  luke@rebellion.org ", "password": " pw "}"#)
                .unwrap();

        assert_eq!(req.email, "luke@rebellion.org");
        // Passwords are taken verbatim.
        assert_eq!(req.password, " pw ");
    }

    #[test]
    fn test_create_user_request_rejects_empty_password() {
        let result = CreateUserRequest::new("luke@rebellion.org", "").into_new_user();
        assert_eq!(
            result,
            Err(ValidationError::EmptyField { field: "password" })
        );
    }

    #[test]
    fn test_create_user_request_requires_both_fields() {
        let result = serde_json::from_str::<CreateUserRequest>(r#"{"email": "a@b.c"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("password"), "unexpected error: {err}");
    }

    #[test]
    fn test_create_user_request_debug_redacts_password() {
        let req = CreateUserRequest::new("luke@rebellion.org", "x-wing");
        assert!(!format!("{req:?}").contains("x-wing"));
    }

    #[test]
    fn test_create_planet_request_reports_first_invalid_field() {
        let req: CreatePlanetRequest = serde_json::from_value(serde_json::json!({
            "name": "Hoth",
            "gravity": "1.1 standard",
            "population": " ",
            "diameter": "7200",
            "rotation_period": "23",
        }))
        .unwrap();

        assert_eq!(
            req.into_new_planet(),
            Err(ValidationError::EmptyField {
                field: "population"
            })
        );
    }

    #[test]
    fn test_create_planet_request_missing_field_is_rejected() {
        let result = serde_json::from_value::<CreatePlanetRequest>(serde_json::json!({
            "name": "Hoth",
            "gravity": "1.1 standard",
            "population": "unknown",
            "diameter": "7200",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_character_request_into_new_character() {
        let req: CreateCharacterRequest = serde_json::from_value(serde_json::json!({
            "name": "Chewbacca",
            "gender": "male",
            "height": "228",
            "eyes_color": "blue",
            "hair_color": "brown",
        }))
        .unwrap();

        let character = req.into_new_character().unwrap();
        assert_eq!(character.name, "Chewbacca");
        assert_eq!(character.hair_color, "brown");
    }

    #[test]
    fn test_create_character_request_rejects_long_name() {
        let req = CreateCharacterRequest {
            name: "A".repeat(121),
            gender: "n/a".to_string(),
            height: "96".to_string(),
            eyes_color: "red".to_string(),
            hair_color: "n/a".to_string(),
        };

        assert!(matches!(
            req.into_new_character(),
            Err(ValidationError::FieldTooLong { field: "name", .. })
        ));
    }

    #[test]
    fn test_favorite_requests_bind_user() {
        let planet = AddFavoritePlanetRequest { planet_id: 4 }.into_new_favorite(2);
        assert_eq!(planet, NewFavorite::planet(2, 4));

        let character = AddFavoriteCharacterRequest { character_id: 8 }.into_new_favorite(2);
        assert_eq!(character, NewFavorite::character(2, 8));
    }

    #[test]
    fn test_favorite_planet_request_rejects_string_id() {
        let result = serde_json::from_str::<AddFavoritePlanetRequest>(r#"{"planet_id": "one"}"#);
        assert!(result.is_err());
    }
}
