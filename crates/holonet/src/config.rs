use std::{env, path::PathBuf};

use thiserror::Error;

/// Database used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_PATH: &str = "/tmp/holonet.db";

const SQLITE_PREFIX: &str = "sqlite:";

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported database scheme '{0}': only sqlite is supported")]
    UnsupportedScheme(String),
}

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database location, parsed from `DATABASE_URL`.
    pub database: DatabaseLocation,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - `sqlite:///relative.db`, `sqlite:////absolute.db`,
    ///   `sqlite::memory:` or a bare path (default: "/tmp/holonet.db")
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").ok();
        Ok(Self {
            database: Self::parse_database_url(url.as_deref())?,
        })
    }

    /// Parses a database URL into a location.
    ///
    /// `sqlite:///` is followed by the file path, so `sqlite:////tmp/a.db`
    /// is absolute and `sqlite:///a.db` is relative to the working directory.
    pub fn parse_database_url(url: Option<&str>) -> Result<DatabaseLocation, ConfigError> {
        let url = match url.map(str::trim) {
            None | Some("") => return Ok(DatabaseLocation::File(DEFAULT_DATABASE_PATH.into())),
            Some(url) => url,
        };

        if url == ":memory:" {
            return Ok(DatabaseLocation::Memory);
        }

        if let Some(rest) = url.strip_prefix(SQLITE_PREFIX) {
            let path = rest.strip_prefix("//").unwrap_or(rest);
            let path = path.strip_prefix('/').unwrap_or(path);
            return Ok(match path {
                "" | ":memory:" => DatabaseLocation::Memory,
                path => DatabaseLocation::File(path.into()),
            });
        }

        if let Some((scheme, _)) = url.split_once("://") {
            return Err(ConfigError::UnsupportedScheme(scheme.to_string()));
        }

        Ok(DatabaseLocation::File(url.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> Result<DatabaseLocation, ConfigError> {
        Ok(DatabaseLocation::File(PathBuf::from(path)))
    }

    #[test]
    fn test_default_path_when_unset() {
        assert_eq!(Config::parse_database_url(None), file("/tmp/holonet.db"));
        assert_eq!(Config::parse_database_url(Some("  ")), file("/tmp/holonet.db"));
    }

    #[test]
    fn test_sqlite_urls() {
        assert_eq!(
            Config::parse_database_url(Some("sqlite:////tmp/test.db")),
            file("/tmp/test.db")
        );
        assert_eq!(
            Config::parse_database_url(Some("sqlite:///holonet.db")),
            file("holonet.db")
        );
    }

    #[test]
    fn test_memory_urls() {
        for url in ["sqlite::memory:", ":memory:", "sqlite://", "sqlite:///:memory:"] {
            assert_eq!(
                Config::parse_database_url(Some(url)),
                Ok(DatabaseLocation::Memory),
                "{url}"
            );
        }
    }

    #[test]
    fn test_bare_path() {
        assert_eq!(
            Config::parse_database_url(Some("data/holonet.db")),
            file("data/holonet.db")
        );
    }

    #[test]
    fn test_postgres_is_rejected() {
        assert_eq!(
            Config::parse_database_url(Some("postgres://user:pw@localhost/db")),
            Err(ConfigError::UnsupportedScheme("postgres".to_string()))
        );
    }
}
