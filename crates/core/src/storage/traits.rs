use async_trait::async_trait;

use crate::catalog::{
    Character, Favorite, NewCharacter, NewFavorite, NewPlanet, NewUser, Planet, RecordId, User,
};

use super::Result;

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their ID.
    async fn get_user(&self, id: RecordId) -> Result<Option<User>>;

    /// Lists all users ordered by ID.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Creates a new user. Fails with `AlreadyExists` if the email is taken.
    async fn create_user(&self, user: &NewUser) -> Result<User>;
}

/// Repository for planet operations.
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Gets a planet by its ID.
    async fn get_planet(&self, id: RecordId) -> Result<Option<Planet>>;

    /// Lists all planets ordered by ID.
    async fn list_planets(&self) -> Result<Vec<Planet>>;

    /// Creates a new planet. Fails with `AlreadyExists` if the name is taken.
    async fn create_planet(&self, planet: &NewPlanet) -> Result<Planet>;
}

/// Repository for character operations.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Gets a character by its ID.
    async fn get_character(&self, id: RecordId) -> Result<Option<Character>>;

    /// Lists all characters ordered by ID.
    async fn list_characters(&self) -> Result<Vec<Character>>;

    /// Creates a new character. Fails with `AlreadyExists` if the name is taken.
    async fn create_character(&self, character: &NewCharacter) -> Result<Character>;
}

/// Repository for favorite operations.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Gets a favorite by its ID.
    async fn get_favorite(&self, id: RecordId) -> Result<Option<Favorite>>;

    /// Lists all favorites ordered by ID.
    async fn list_favorites(&self) -> Result<Vec<Favorite>>;

    /// Creates a new favorite.
    ///
    /// The referenced planet or character and the owning user are checked in
    /// the same unit of work as the insert; the first absent row fails the
    /// call with `MissingReference` (target first, then user) and nothing is
    /// written.
    async fn create_favorite(&self, favorite: &NewFavorite) -> Result<Favorite>;

    /// Deletes a favorite by its own ID. Fails with `NotFound` if absent.
    async fn delete_favorite(&self, id: RecordId) -> Result<()>;
}
