//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from
//! `companyhub_core::storage`. Constraint failures keep SQLite's message so
//! callers can surface which constraint was violated.

use companyhub_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - Any `SQLITE_CONSTRAINT_*` (NOT NULL, UNIQUE, CHECK, FOREIGN KEY) →
///   `RepositoryError::ConstraintViolation`
/// - Connection errors → `RepositoryError::ConnectionFailed`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            RepositoryError::constraint(entity_type, err.to_string())
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
/// It extracts the inner `rusqlite::Error` if present, otherwise
/// maps to a generic `QueryFailed` error.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type)
        }
        tokio_rusqlite::Error::ConnectionClosed => {
            RepositoryError::ConnectionFailed("Connection closed".to_string())
        }
        tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
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
    fn test_unique_constraint_maps_to_constraint_violation() {
        let err = constraint_error(
            ffi::SQLITE_CONSTRAINT_UNIQUE,
            "UNIQUE constraint failed: companies.name",
        );

        let result = map_tokio_rusqlite_error(err, "Company");

        match result {
            RepositoryError::ConstraintViolation {
                entity_type,
                detail,
            } => {
                assert_eq!(entity_type, "Company");
                assert!(detail.contains("companies.name"));
            }
            other => panic!("Expected ConstraintViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_foreign_key_maps_to_constraint_violation() {
        let err = constraint_error(
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            "FOREIGN KEY constraint failed",
        );

        let result = map_tokio_rusqlite_error(err, "Address");

        assert!(matches!(
            result,
            RepositoryError::ConstraintViolation {
                entity_type: "Address",
                ..
            }
        ));
    }

    #[test]
    fn test_not_null_maps_to_constraint_violation() {
        let err = constraint_error(
            ffi::SQLITE_CONSTRAINT_NOTNULL,
            "NOT NULL constraint failed: addresses.state",
        );

        let result = map_tokio_rusqlite_error(err, "Address");

        assert_eq!(
            result.to_string(),
            "Address constraint violated: NOT NULL constraint failed: addresses.state"
        );
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, "Company");
        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "Company");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }
}
