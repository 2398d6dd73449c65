//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses repository trait objects for storage abstraction
//! and picks the backend via feature flags.

use std::sync::Arc;

use holonet_core::storage::{
    CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository,
};

use crate::config::Config;
#[cfg(feature = "sqlite")]
use crate::config::DatabaseLocation;

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository trait
/// objects for database access.
#[derive(Clone)]
pub struct AppState {
    pub user_repo: Arc<dyn UserRepository>,
    pub planet_repo: Arc<dyn PlanetRepository>,
    pub character_repo: Arc<dyn CharacterRepository>,
    pub favorite_repo: Arc<dyn FavoriteRepository>,
}

impl AppState {
    /// Creates an AppState where every repository is served by one backend.
    fn build<R>(repo: R) -> Self
    where
        R: UserRepository + PlanetRepository + CharacterRepository + FavoriteRepository + 'static,
    {
        let repo = Arc::new(repo);
        Self {
            user_repo: repo.clone(),
            planet_repo: repo.clone(),
            character_repo: repo.clone(),
            favorite_repo: repo,
        }
    }

    /// Creates the state for the SQLite backend, migrating the schema first.
    #[cfg(feature = "sqlite")]
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::SqliteRepository;

        let repo = match &config.database {
            DatabaseLocation::File(path) => {
                tracing::info!(path = %path.display(), "Opening SQLite database");
                SqliteRepository::new(path).await?
            }
            DatabaseLocation::Memory => {
                tracing::info!("Opening in-memory SQLite database");
                SqliteRepository::new_in_memory().await?
            }
        };

        Ok(Self::build(repo))
    }

    /// Creates the state for the in-memory backend.
    #[cfg(feature = "inmemory")]
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        use crate::storage::InMemoryRepository;

        tracing::info!(
            database = ?config.database,
            "Using in-memory storage, DATABASE_URL is ignored"
        );

        Ok(Self::build(InMemoryRepository::new()))
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::build(crate::storage::InMemoryRepository::new())
    }
}
