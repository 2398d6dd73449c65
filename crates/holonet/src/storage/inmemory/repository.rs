//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use holonet_core::catalog::{
    Character, Favorite, NewCharacter, NewFavorite, NewPlanet, NewUser, Planet, RecordId, User,
};
use holonet_core::storage::{
    CharacterRepository, FavoriteRepository, PlanetRepository, RepositoryError, Result,
    UserRepository,
};

/// One table: rows keyed by id, plus the next id to hand out.
///
/// Ids are never reused, matching `AUTOINCREMENT` in the SQLite backend.
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<RecordId, T>,
    next_id: RecordId,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn get(&self, id: RecordId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn contains(&self, id: RecordId) -> bool {
        self.rows.contains_key(&id)
    }

    /// Rows in ascending id order.
    fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn insert(&mut self, build: impl FnOnce(RecordId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }
}

#[derive(Debug)]
struct Tables {
    users: Table<User>,
    planets: Table<Planet>,
    characters: Table<Character>,
    favorites: Table<Favorite>,
}

/// In-memory storage backend.
///
/// A single lock guards all tables, so reference checks and the insert that
/// follows them observe the same state. Data is lost when the repository is
/// dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                users: Table::new(),
                planets: Table::new(),
                characters: Table::new(),
                favorites: Table::new(),
            })),
        }
    }
}

fn already_exists(entity_type: &'static str, key: &str) -> RepositoryError {
    RepositoryError::AlreadyExists {
        entity_type,
        key: key.to_string(),
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: RecordId) -> Result<Option<User>> {
        Ok(self.tables.read().await.users.get(id))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.tables.read().await.users.list())
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let mut tables = self.tables.write().await;
        if tables.users.rows.values().any(|u| u.email == user.email) {
            return Err(already_exists(User::ENTITY, "user.email"));
        }
        let new_user = user.clone();
        Ok(tables.users.insert(|id| new_user.into_user(id)))
    }
}

#[async_trait]
impl PlanetRepository for InMemoryRepository {
    async fn get_planet(&self, id: RecordId) -> Result<Option<Planet>> {
        Ok(self.tables.read().await.planets.get(id))
    }

    async fn list_planets(&self) -> Result<Vec<Planet>> {
        Ok(self.tables.read().await.planets.list())
    }

    async fn create_planet(&self, planet: &NewPlanet) -> Result<Planet> {
        let mut tables = self.tables.write().await;
        if tables.planets.rows.values().any(|p| p.name == planet.name) {
            return Err(already_exists(Planet::ENTITY, "planets.name"));
        }
        let new_planet = planet.clone();
        Ok(tables.planets.insert(|id| new_planet.into_planet(id)))
    }
}

#[async_trait]
impl CharacterRepository for InMemoryRepository {
    async fn get_character(&self, id: RecordId) -> Result<Option<Character>> {
        Ok(self.tables.read().await.characters.get(id))
    }

    async fn list_characters(&self) -> Result<Vec<Character>> {
        Ok(self.tables.read().await.characters.list())
    }

    async fn create_character(&self, character: &NewCharacter) -> Result<Character> {
        let mut tables = self.tables.write().await;
        if tables
            .characters
            .rows
            .values()
            .any(|c| c.name == character.name)
        {
            return Err(already_exists(Character::ENTITY, "character.name"));
        }
        let new_character = character.clone();
        Ok(tables
            .characters
            .insert(|id| new_character.into_character(id)))
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryRepository {
    async fn get_favorite(&self, id: RecordId) -> Result<Option<Favorite>> {
        Ok(self.tables.read().await.favorites.get(id))
    }

    async fn list_favorites(&self) -> Result<Vec<Favorite>> {
        Ok(self.tables.read().await.favorites.list())
    }

    async fn create_favorite(&self, favorite: &NewFavorite) -> Result<Favorite> {
        let mut tables = self.tables.write().await;

        if let Some(planet_id) = favorite.planet_id {
            if !tables.planets.contains(planet_id) {
                return Err(RepositoryError::missing_reference(Planet::ENTITY, planet_id));
            }
        }
        if let Some(character_id) = favorite.character_id {
            if !tables.characters.contains(character_id) {
                return Err(RepositoryError::missing_reference(
                    Character::ENTITY,
                    character_id,
                ));
            }
        }
        if !tables.users.contains(favorite.user_id) {
            return Err(RepositoryError::missing_reference(
                User::ENTITY,
                favorite.user_id,
            ));
        }

        let new_favorite = *favorite;
        Ok(tables.favorites.insert(|id| new_favorite.into_favorite(id)))
    }

    async fn delete_favorite(&self, id: RecordId) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.favorites.rows.remove(&id).is_none() {
            return Err(RepositoryError::not_found(Favorite::ENTITY, id));
        }
        Ok(())
    }
}
