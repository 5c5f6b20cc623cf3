use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Absence is never an error: lookups return `Option` and scoped writes
/// return the number of affected rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store rejected a write (NOT NULL, UNIQUE, CHECK or FOREIGN KEY).
    #[error("{entity_type} constraint violated: {detail}")]
    ConstraintViolation {
        entity_type: &'static str,
        detail: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl RepositoryError {
    pub fn constraint(entity_type: &'static str, detail: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            entity_type,
            detail: detail.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
