use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} with id {id} not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// A unique column already holds the submitted value. `key` names the
    /// column (`user.email`), never the value.
    #[error("{entity_type} already exists: {key}")]
    AlreadyExists {
        entity_type: &'static str,
        key: String,
    },
    /// A favorite points at a row that does not exist.
    #[error("{entity_type} with id {id} not found")]
    MissingReference {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn missing_reference(entity_type: &'static str, id: impl ToString) -> Self {
        Self::MissingReference {
            entity_type,
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::not_found("user", 42);
        assert_eq!(error.to_string(), "user with id 42 not found");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "planets",
            key: "planets.name".to_string(),
        };
        assert_eq!(error.to_string(), "planets already exists: planets.name");
    }

    #[test]
    fn test_repository_error_missing_reference_display() {
        let error = RepositoryError::missing_reference("planets", 9);
        assert_eq!(error.to_string(), "planets with id 9 not found");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("unable to open file".to_string());
        assert_eq!(error.to_string(), "Connection failed: unable to open file");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: planets".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: planets");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("schema version 9 is newer".to_string());
        assert_eq!(error.to_string(), "Invalid data: schema version 9 is newer");
    }
}
