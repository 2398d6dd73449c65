//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of the repository traits
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.
//! Table definitions are versioned in [`migrations`].

mod conversions;
mod error;
pub mod migrations;
mod repository;
mod schema;

pub use repository::SqliteRepository;
