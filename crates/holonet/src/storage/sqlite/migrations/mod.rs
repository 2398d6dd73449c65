//! Versioned schema migrations.
//!
//! Each migration carries an `up` script that creates tables and a `down`
//! script that drops them. The applied version is mirrored to
//! `PRAGMA user_version`, so a database file records its own schema level.
//!
//! Versions must stay strictly increasing; pending steps are applied (or
//! reverted) inside a single transaction.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error(
        "database schema version {db_version} is newer than the latest supported version {latest_supported}"
    )]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    #[error("cannot revert to version {target}: database is at version {current}")]
    InvalidTarget { target: u32, current: u32 },
}

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    up: &'static str,
    down: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        up: include_str!("0001_create_user.up.sql"),
        down: include_str!("0001_create_user.down.sql"),
    },
    Migration {
        version: 2,
        up: include_str!("0002_create_catalog.up.sql"),
        down: include_str!("0002_create_catalog.down.sql"),
    },
];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Returns the schema version recorded in the database.
pub fn current_version(conn: &Connection) -> Result<u32, MigrationError> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Applies all pending migrations and returns the resulting version.
pub fn apply_migrations(conn: &mut Connection) -> Result<u32, MigrationError> {
    let current = current_version(conn)?;
    let latest = latest_version();

    if current > latest {
        return Err(MigrationError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }

    if current == latest {
        return Ok(current);
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        tracing::info!(version = migration.version, "Applying schema migration");
        tx.execute_batch(migration.up)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(latest)
}

/// Reverts applied migrations, newest first, until the schema is at `target`.
///
/// `target = 0` drops every table.
pub fn revert_to(conn: &mut Connection, target: u32) -> Result<(), MigrationError> {
    let current = current_version(conn)?;

    if current > latest_version() {
        return Err(MigrationError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest_version(),
        });
    }

    if target > current {
        return Err(MigrationError::InvalidTarget { target, current });
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS
        .iter()
        .rev()
        .filter(|m| m.version <= current && m.version > target)
    {
        tracing::info!(version = migration.version, "Reverting schema migration");
        tx.execute_batch(migration.down)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version - 1))?;
    }
    tx.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare(
                "SELECT name FROM sqlite_master \
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
            )
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<Vec<String>>>()
            .unwrap()
    }

    #[test]
    fn test_versions_are_strictly_increasing() {
        for pair in MIGRATIONS.windows(2) {
            assert!(pair[0].version < pair[1].version);
        }
        assert_eq!(latest_version(), 2);
    }

    #[test]
    fn test_apply_creates_all_tables() {
        let mut conn = Connection::open_in_memory().unwrap();

        let version = apply_migrations(&mut conn).unwrap();

        assert_eq!(version, latest_version());
        assert_eq!(current_version(&conn).unwrap(), latest_version());
        assert_eq!(
            table_names(&conn),
            vec!["character", "favorites", "planets", "user"]
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();

        apply_migrations(&mut conn).unwrap();
        let version = apply_migrations(&mut conn).unwrap();

        assert_eq!(version, latest_version());
    }

    #[test]
    fn test_apply_resumes_from_recorded_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(MIGRATIONS[0].up).unwrap();
        conn.execute_batch("PRAGMA user_version = 1;").unwrap();

        apply_migrations(&mut conn).unwrap();

        assert_eq!(
            table_names(&conn),
            vec!["character", "favorites", "planets", "user"]
        );
    }

    #[test]
    fn test_newer_database_is_rejected() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();

        let result = apply_migrations(&mut conn);

        assert!(matches!(
            result,
            Err(MigrationError::UnsupportedSchemaVersion {
                db_version: 99,
                latest_supported: 2
            })
        ));
    }

    #[test]
    fn test_revert_one_step_keeps_user_table() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();

        revert_to(&mut conn, 1).unwrap();

        assert_eq!(current_version(&conn).unwrap(), 1);
        assert_eq!(table_names(&conn), vec!["user"]);
    }

    #[test]
    fn test_revert_to_zero_drops_everything() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();

        revert_to(&mut conn, 0).unwrap();

        assert_eq!(current_version(&conn).unwrap(), 0);
        assert!(table_names(&conn).is_empty());
    }

    #[test]
    fn test_revert_above_current_is_rejected() {
        let mut conn = Connection::open_in_memory().unwrap();

        let result = revert_to(&mut conn, 2);

        assert!(matches!(
            result,
            Err(MigrationError::InvalidTarget {
                target: 2,
                current: 0
            })
        ));
    }
}
