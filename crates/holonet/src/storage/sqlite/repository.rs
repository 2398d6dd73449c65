//! SQLite repository implementation.
//!
//! Implements the repository traits from `holonet_core::storage` using SQLite.
//! Every write runs inside [`with_transaction`], so a request either commits
//! its whole unit of work or leaves the database untouched.

use std::path::Path;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use holonet_core::catalog::{
    Character, Favorite, NewCharacter, NewFavorite, NewPlanet, NewUser, Planet, RecordId, User,
};
use holonet_core::storage::{
    CharacterRepository, FavoriteRepository, PlanetRepository, RepositoryError, Result,
    UserRepository,
};

use super::conversions::{row_to_character, row_to_favorite, row_to_planet, row_to_user};
use super::error::{
    map_migration_error, map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id,
};
use super::{migrations, schema};

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Runs `work` inside a transaction that is committed only when both the
/// SQL and the domain outcome succeed.
///
/// Returning early, failing, or panicking drops the `Transaction`, which
/// rolls it back.
fn with_transaction<T>(
    conn: &mut rusqlite::Connection,
    work: impl FnOnce(&rusqlite::Transaction<'_>) -> rusqlite::Result<Result<T>>,
) -> rusqlite::Result<Result<T>> {
    let tx = conn.transaction()?;
    let outcome = work(&tx)?;
    if outcome.is_ok() {
        tx.commit()?;
    }
    Ok(outcome)
}

/// Returns true if `query` (a `SELECT EXISTS(...)`) finds a row for `id`.
fn exists(tx: &rusqlite::Transaction<'_>, query: &str, id: RecordId) -> rusqlite::Result<bool> {
    tx.query_row(query, [id], |row| row.get(0))
}

/// Collects every row of `query` through `convert`.
fn query_all<T>(
    conn: &rusqlite::Connection,
    query: &str,
    convert: fn(&rusqlite::Row) -> rusqlite::Result<T>,
) -> rusqlite::Result<Vec<T>> {
    let mut stmt = conn.prepare(query)?;
    let rows = stmt.query_map([], convert)?;

    let mut results = Vec::new();
    for row_result in rows {
        results.push(row_result?);
    }
    Ok(results)
}

/// Fetches the row of `query` matching `id`, if any.
fn query_by_id<T>(
    conn: &rusqlite::Connection,
    query: &str,
    id: RecordId,
    convert: fn(&rusqlite::Row) -> rusqlite::Result<T>,
) -> rusqlite::Result<Option<T>> {
    let mut stmt = conn.prepare(query)?;
    match stmt.query_row([id], convert) {
        Ok(record) => Ok(Some(record)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for all entity types.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens a file-based database and brings its schema up to date.
    ///
    /// The database file will be created if it doesn't exist.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Self::connect(path).await?;
        repo.migrate().await?;
        Ok(repo)
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let repo = Self::init(conn).await?;
        repo.migrate().await?;
        Ok(repo)
    }

    /// Opens a file-based database without touching its schema.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init(conn).await
    }

    async fn init(conn: Connection) -> Result<Self> {
        conn.call(|conn| {
            conn.execute_batch(schema::CONNECTION_PRAGMAS)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Applies pending migrations and returns the resulting schema version.
    pub async fn migrate(&self) -> Result<u32> {
        self.conn
            .call(|conn| Ok(migrations::apply_migrations(conn)))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "schema"))?
            .map_err(map_migration_error)
    }

    /// Reverts migrations until the schema is at `target`.
    pub async fn revert_to(&self, target: u32) -> Result<()> {
        self.conn
            .call(move |conn| Ok(migrations::revert_to(conn, target)))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "schema"))?
            .map_err(map_migration_error)
    }

    /// Returns the schema version recorded in the database.
    pub async fn schema_version(&self) -> Result<u32> {
        self.conn
            .call(|conn| Ok(migrations::current_version(conn)))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "schema"))?
            .map_err(map_migration_error)
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user(&self, id: RecordId) -> Result<Option<User>> {
        self.conn
            .call(move |conn| {
                query_by_id(conn, schema::SELECT_USER_BY_ID, id, row_to_user).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, User::ENTITY, id.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.conn
            .call(|conn| query_all(conn, schema::SELECT_USERS, row_to_user).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, User::ENTITY))
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let new_user = user.clone();

        self.conn
            .call(move |conn| {
                with_transaction(conn, |tx| {
                    tx.execute(
                        schema::INSERT_USER,
                        rusqlite::params![new_user.email, new_user.password],
                    )?;
                    Ok(Ok(new_user.into_user(tx.last_insert_rowid())))
                })
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, User::ENTITY))?
    }
}

// ============================================================================
// PlanetRepository implementation
// ============================================================================

#[async_trait]
impl PlanetRepository for SqliteRepository {
    async fn get_planet(&self, id: RecordId) -> Result<Option<Planet>> {
        self.conn
            .call(move |conn| {
                query_by_id(conn, schema::SELECT_PLANET_BY_ID, id, row_to_planet)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, Planet::ENTITY, id.to_string()))
    }

    async fn list_planets(&self) -> Result<Vec<Planet>> {
        self.conn
            .call(|conn| query_all(conn, schema::SELECT_PLANETS, row_to_planet).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Planet::ENTITY))
    }

    async fn create_planet(&self, planet: &NewPlanet) -> Result<Planet> {
        let new_planet = planet.clone();

        self.conn
            .call(move |conn| {
                with_transaction(conn, |tx| {
                    tx.execute(
                        schema::INSERT_PLANET,
                        rusqlite::params![
                            new_planet.name,
                            new_planet.gravity,
                            new_planet.population,
                            new_planet.diameter,
                            new_planet.rotation_period
                        ],
                    )?;
                    Ok(Ok(new_planet.into_planet(tx.last_insert_rowid())))
                })
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Planet::ENTITY))?
    }
}

// ============================================================================
// CharacterRepository implementation
// ============================================================================

#[async_trait]
impl CharacterRepository for SqliteRepository {
    async fn get_character(&self, id: RecordId) -> Result<Option<Character>> {
        self.conn
            .call(move |conn| {
                query_by_id(conn, schema::SELECT_CHARACTER_BY_ID, id, row_to_character)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, Character::ENTITY, id.to_string()))
    }

    async fn list_characters(&self) -> Result<Vec<Character>> {
        self.conn
            .call(|conn| {
                query_all(conn, schema::SELECT_CHARACTERS, row_to_character).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Character::ENTITY))
    }

    async fn create_character(&self, character: &NewCharacter) -> Result<Character> {
        let new_character = character.clone();

        self.conn
            .call(move |conn| {
                with_transaction(conn, |tx| {
                    tx.execute(
                        schema::INSERT_CHARACTER,
                        rusqlite::params![
                            new_character.name,
                            new_character.gender,
                            new_character.height,
                            new_character.eyes_color,
                            new_character.hair_color
                        ],
                    )?;
                    Ok(Ok(new_character.into_character(tx.last_insert_rowid())))
                })
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Character::ENTITY))?
    }
}

// ============================================================================
// FavoriteRepository implementation
// ============================================================================

#[async_trait]
impl FavoriteRepository for SqliteRepository {
    async fn get_favorite(&self, id: RecordId) -> Result<Option<Favorite>> {
        self.conn
            .call(move |conn| {
                query_by_id(conn, schema::SELECT_FAVORITE_BY_ID, id, row_to_favorite)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, Favorite::ENTITY, id.to_string()))
    }

    async fn list_favorites(&self) -> Result<Vec<Favorite>> {
        self.conn
            .call(|conn| {
                query_all(conn, schema::SELECT_FAVORITES, row_to_favorite).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Favorite::ENTITY))
    }

    async fn create_favorite(&self, favorite: &NewFavorite) -> Result<Favorite> {
        let new_favorite = *favorite;

        self.conn
            .call(move |conn| {
                with_transaction(conn, |tx| {
                    if let Some(planet_id) = new_favorite.planet_id {
                        if !exists(tx, schema::PLANET_EXISTS, planet_id)? {
                            return Ok(Err(RepositoryError::missing_reference(
                                Planet::ENTITY,
                                planet_id,
                            )));
                        }
                    }
                    if let Some(character_id) = new_favorite.character_id {
                        if !exists(tx, schema::CHARACTER_EXISTS, character_id)? {
                            return Ok(Err(RepositoryError::missing_reference(
                                Character::ENTITY,
                                character_id,
                            )));
                        }
                    }
                    if !exists(tx, schema::USER_EXISTS, new_favorite.user_id)? {
                        return Ok(Err(RepositoryError::missing_reference(
                            User::ENTITY,
                            new_favorite.user_id,
                        )));
                    }

                    tx.execute(
                        schema::INSERT_FAVORITE,
                        rusqlite::params![
                            new_favorite.user_id,
                            new_favorite.character_id,
                            new_favorite.planet_id
                        ],
                    )?;
                    Ok(Ok(new_favorite.into_favorite(tx.last_insert_rowid())))
                })
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Favorite::ENTITY))?
    }

    async fn delete_favorite(&self, id: RecordId) -> Result<()> {
        self.conn
            .call(move |conn| {
                with_transaction(conn, |tx| {
                    let rows = tx.execute(schema::DELETE_FAVORITE, [id])?;
                    if rows == 0 {
                        Ok(Err(RepositoryError::not_found(Favorite::ENTITY, id)))
                    } else {
                        Ok(Ok(()))
                    }
                })
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, Favorite::ENTITY, id.to_string()))?
    }
}
