use std::fmt;

use serde::{Deserialize, Serialize};

/// Surrogate key assigned by the storage backend.
pub type RecordId = i64;

/// An account that can bookmark planets and characters.
///
/// The password is accepted on creation and stored, but it is never part of
/// the serialized representation and is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl User {
    /// Name used for this record in storage and error messages.
    pub const ENTITY: &'static str = "user";
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A planet from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub id: RecordId,
    pub name: String,
    pub gravity: String,
    pub population: String,
    pub diameter: String,
    pub rotation_period: String,
}

impl Planet {
    pub const ENTITY: &'static str = "planets";
}

/// A character from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: RecordId,
    pub name: String,
    pub gender: String,
    pub height: String,
    pub eyes_color: String,
    pub hair_color: String,
}

impl Character {
    pub const ENTITY: &'static str = "character";
}

/// A user's bookmark of a character or a planet.
///
/// Both targets are optional at the storage level; the API only ever sets
/// one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: RecordId,
    pub user_id: RecordId,
    pub character_id: Option<RecordId>,
    pub planet_id: Option<RecordId>,
}

impl Favorite {
    pub const ENTITY: &'static str = "favorites";
}

/// Fields required to insert a user.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Attaches the id assigned by storage.
    pub fn into_user(self, id: RecordId) -> User {
        User {
            id,
            email: self.email,
            password: self.password,
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fields required to insert a planet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub gravity: String,
    pub population: String,
    pub diameter: String,
    pub rotation_period: String,
}

impl NewPlanet {
    /// Attaches the id assigned by storage.
    pub fn into_planet(self, id: RecordId) -> Planet {
        Planet {
            id,
            name: self.name,
            gravity: self.gravity,
            population: self.population,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
        }
    }
}

/// Fields required to insert a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub gender: String,
    pub height: String,
    pub eyes_color: String,
    pub hair_color: String,
}

impl NewCharacter {
    /// Attaches the id assigned by storage.
    pub fn into_character(self, id: RecordId) -> Character {
        Character {
            id,
            name: self.name,
            gender: self.gender,
            height: self.height,
            eyes_color: self.eyes_color,
            hair_color: self.hair_color,
        }
    }
}

/// Fields required to insert a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: RecordId,
    pub character_id: Option<RecordId>,
    pub planet_id: Option<RecordId>,
}

impl NewFavorite {
    /// A favorite pointing at a planet.
    pub fn planet(user_id: RecordId, planet_id: RecordId) -> Self {
        Self {
            user_id,
            character_id: None,
            planet_id: Some(planet_id),
        }
    }

    /// A favorite pointing at a character.
    pub fn character(user_id: RecordId, character_id: RecordId) -> Self {
        Self {
            user_id,
            character_id: Some(character_id),
            planet_id: None,
        }
    }

    /// Attaches the id assigned by storage.
    pub fn into_favorite(self, id: RecordId) -> Favorite {
        Favorite {
            id,
            user_id: self.user_id,
            character_id: self.character_id,
            planet_id: self.planet_id,
        }
    }
}
