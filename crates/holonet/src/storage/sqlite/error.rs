//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from `holonet_core::storage`.
//! Specific errors are mapped to semantic variants (e.g., UNIQUE constraint to AlreadyExists).

use holonet_core::storage::RepositoryError;

use super::migrations::MigrationError;

const UNIQUE_FAILED_PREFIX: &str = "UNIQUE constraint failed: ";

/// Extracts the `table.column` named in a UNIQUE violation message.
fn unique_key(message: Option<&str>) -> String {
    message
        .and_then(|m| m.strip_prefix(UNIQUE_FAILED_PREFIX))
        .unwrap_or("unknown")
        .to_string()
}

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_UNIQUE` → `RepositoryError::AlreadyExists`
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` → `RepositoryError::InvalidData`
/// - Connection errors → `RepositoryError::ConnectionFailed`
/// - `QueryReturnedNoRows` → `RepositoryError::NotFound`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str, id: &str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, message)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepositoryError::AlreadyExists {
                entity_type,
                key: unique_key(message.as_deref()),
            }
        }

        // Only reachable if a reference check was skipped; the repository
        // checks references before inserting.
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            RepositoryError::InvalidData(format!(
                "Foreign key constraint violation for {entity_type}"
            ))
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        },

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    map_tokio_rusqlite_error_with_id(err, entity_type, "unknown")
}

/// Maps a tokio_rusqlite error with a known ID to a RepositoryError.
///
/// Use this variant when the entity ID is known at the call site.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, &id.into())
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a migration failure to a RepositoryError.
pub fn map_migration_error(err: MigrationError) -> RepositoryError {
    match err {
        MigrationError::Sqlite(e) => RepositoryError::QueryFailed(e.to_string()),
        other => RepositoryError::InvalidData(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn constraint_error(extended_code: i32, message: &str) -> tokio_rusqlite::Error {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code,
        };
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
            sqlite_err,
            Some(message.to_string()),
        ))
    }

    #[test]
    fn test_unique_constraint_maps_to_already_exists() {
        let err = constraint_error(
            ffi::SQLITE_CONSTRAINT_UNIQUE,
            "UNIQUE constraint failed: user.email",
        );

        let result = map_tokio_rusqlite_error(err, "user");

        assert_eq!(
            result,
            RepositoryError::AlreadyExists {
                entity_type: "user",
                key: "user.email".to_string(),
            }
        );
    }

    #[test]
    fn test_unique_constraint_without_message_uses_unknown_key() {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code: ffi::SQLITE_CONSTRAINT_UNIQUE,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error(err, "planets");

        assert!(matches!(
            result,
            RepositoryError::AlreadyExists { key, .. } if key == "unknown"
        ));
    }

    #[test]
    fn test_foreign_key_maps_to_invalid_data() {
        let err = constraint_error(
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            "FOREIGN KEY constraint failed",
        );

        let result = map_tokio_rusqlite_error(err, "favorites");

        assert!(matches!(result, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_no_rows_with_id_maps_to_not_found() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error_with_id(err, "favorites", "12");

        assert_eq!(result, RepositoryError::not_found("favorites", 12));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, "user");
        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "user");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }

    #[test]
    fn test_newer_schema_maps_to_invalid_data() {
        let err = MigrationError::UnsupportedSchemaVersion {
            db_version: 7,
            latest_supported: 2,
        };

        assert!(matches!(
            map_migration_error(err),
            RepositoryError::InvalidData(_)
        ));
    }
}
