use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use companyhub_core::storage::RepositoryError;
use serde_json::json;

/// Error returned by the API handlers.
///
/// Every variant renders as `{"error": "<message>"}` with the matching
/// status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Internal(String),
    /// Repository failure answered with a fixed message; the detail is only logged.
    #[error("{message}")]
    Store {
        message: &'static str,
        source: RepositoryError,
    },
    #[error("{0}")]
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) | Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        match &self {
            Self::Store { source, .. } => {
                tracing::error!(status = %status, message = %message, error = %source, "API error");
            }
            _ if status.is_server_error() => {
                tracing::error!(status = %status, message = %message, "API error");
            }
            _ => {
                tracing::warn!(status = %status, message = %message, "API error");
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
