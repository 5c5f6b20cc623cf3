pub mod addresses;
pub mod companies;
pub mod error;
pub mod health;

use axum::extract::rejection::{JsonRejection, PathRejection};
use companyhub_core::storage::RepositoryError;

pub use error::ApiError;

/// Maps a JSON body rejection to a 400 response.
fn invalid_body(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
}

/// Maps a path parameter rejection to a 400 response.
fn invalid_path(rejection: PathRejection) -> ApiError {
    ApiError::BadRequest(format!("Invalid path parameter: {}", rejection.body_text()))
}

/// Wraps a repository failure behind a fixed message, keeping it as the source.
fn store_failure(message: &'static str) -> impl FnOnce(RepositoryError) -> ApiError {
    move |source| ApiError::Store { message, source }
}
